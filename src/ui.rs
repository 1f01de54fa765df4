use crate::models::{DayView, TaskRow};

pub fn render_page(view: &DayView) -> String {
    let disabled = if view.input_disabled { " disabled" } else { "" };
    let add_disabled = if view.add_disabled { " disabled" } else { "" };
    let rows: String = view.rows.iter().map(|row| render_row(&view.date, row)).collect();

    INDEX_HTML
        .replace("{{TITLE}}", &escape(&view.title))
        .replace("{{DATE}}", &escape(&view.date))
        .replace("{{INPUT_DISABLED}}", disabled)
        .replace("{{ADD_DISABLED}}", add_disabled)
        .replace("{{LOCKED}}", if view.locked { "true" } else { "false" })
        .replace("{{TASKS}}", &rows)
}

fn render_row(date: &str, row: &TaskRow) -> String {
    let date = escape(date);
    let id = escape(&row.id);
    let checked = if row.done { " checked" } else { "" };
    let checkbox_disabled = if row.checkbox_disabled { " disabled" } else { "" };
    let delete = if row.deletable {
        format!(
            r#"<form method="post" action="/tasks/delete" class="inline">
          <input type="hidden" name="date" value="{date}" />
          <input type="hidden" name="id" value="{id}" />
          <button class="delete-btn" type="submit">Delete</button>
        </form>"#
        )
    } else {
        String::new()
    };

    format!(
        r#"
      <li class="task{done_class}" data-id="{id}">
        <form method="post" action="/tasks/toggle" class="inline">
          <input type="hidden" name="date" value="{date}" />
          <input type="hidden" name="id" value="{id}" />
          <label>
            <input type="checkbox" class="toggle"{checked}{checkbox_disabled} />
            <span class="text">{text}</span>
          </label>
        </form>
        {delete}
      </li>"#,
        done_class = if row.done { " done" } else { "" },
        text = escape(&row.text),
    )
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calendar To-Do</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
      color: var(--accent-2);
    }

    .app[data-locked="true"] h2 {
      color: #8b857d;
    }

    form.row {
      display: flex;
      gap: 12px;
    }

    form.inline {
      display: inline;
    }

    input[type="date"],
    input[type="text"] {
      flex: 1;
      font: inherit;
      padding: 12px 16px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled,
    input:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li.task {
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: white;
      border-radius: 16px;
      padding: 12px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    li.task.done .text {
      text-decoration: line-through;
      color: #8b857d;
    }

    .delete-btn {
      margin-left: 10px;
      padding: 6px 14px;
      background: var(--accent-2);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app" data-locked="{{LOCKED}}">
    <h1>Calendar To-Do</h1>

    <form class="row" method="get" action="/">
      <input type="date" id="datePicker" name="date" value="{{DATE}}" />
      <noscript><button type="submit">Go</button></noscript>
    </form>

    <h2 id="selectedDateTitle">{{TITLE}}</h2>

    <form class="row" method="post" action="/tasks/add">
      <input type="hidden" name="date" value="{{DATE}}" />
      <input type="text" id="taskInput" name="text" placeholder="New task" autocomplete="off"{{INPUT_DISABLED}} />
      <button id="addBtn" type="submit"{{ADD_DISABLED}}>Add</button>
    </form>

    <ul id="taskList">{{TASKS}}
    </ul>

    <p class="hint">Past days and days with every task done are read only.</p>
  </main>

  <script>
    document.getElementById('datePicker').addEventListener('change', (event) => {
      event.target.form.submit();
    });
    document.querySelectorAll('.toggle').forEach((box) => {
      box.addEventListener('change', () => box.form.submit());
    });
  </script>
</body>
</html>
"#;
