use crate::dashboard::Widget;

/// Dashboard page with one mount point per widget in `widgets`.
pub fn render_index(widgets: &[Widget]) -> String {
    let mounts: String = widgets
        .iter()
        .map(|widget| {
            let class = if widget.is_grid() { "grid-card" } else { "chart-card" };
            format!(
                "      <div class=\"{class}\" id=\"{id}\" data-widget=\"{id}\"></div>\n",
                id = widget.mount_id()
            )
        })
        .collect();
    INDEX_HTML.replace("{{WIDGETS}}", &mounts)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pints Dashboard</title>
  <script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=IBM+Plex+Mono:wght@400;600&display=swap');

    :root {
      --bg: #f1ede1;
      --ink: #3c3a35;
      --muted: #605e57;
      --accent: #f9a828;
      --accent-2: #07617d;
      --card: #fbf8f0;
      --border: #98968f;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "IBM Plex Mono", monospace;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1200px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .widgets {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(520px, 1fr));
      gap: 20px;
    }

    .chart-card,
    .grid-card,
    .panel {
      background: var(--card);
      border: 1px solid var(--border);
      padding: 16px;
    }

    .chart-card {
      height: 440px;
    }

    .grid-card {
      max-height: 440px;
      overflow: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th {
      background: #e4dad1;
      text-align: left;
      font-size: 0.9rem;
    }

    th,
    td {
      padding: 8px 10px;
      border-bottom: 1px solid rgba(152, 150, 143, 0.4);
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input,
    textarea {
      font: inherit;
      padding: 8px;
      border: 1px solid var(--border);
      background: white;
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      padding: 12px 18px;
      background: var(--accent-2);
      color: white;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Pints</h1>
      <p class="status" id="status"></p>
    </header>

    <section class="widgets">
{{WIDGETS}}    </section>

    <section class="panel">
      <h2>Add New Pint Entry</h2>
      <form id="add-form">
        <label>Date<input type="date" name="date" /></label>
        <label>Location<input type="text" name="location" /></label>
        <label>Pint brand<input type="text" name="pint_brand" /></label>
        <label>Pint cost<input type="text" name="pint_cost" /></label>
        <label>Number<input type="text" name="number" /></label>
        <label>Friends (comma separated)<input type="text" name="friend_names" /></label>
        <label>Comment<textarea name="comment"></textarea></label>
        <button type="submit">Add pint</button>
      </form>
    </section>

    <section class="panel">
      <h2>Pint History</h2>
      <div id="history"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const charts = [];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderTable = (element, columns, rows) => {
      const table = document.createElement('table');
      const head = table.createTHead().insertRow();
      columns.forEach((column) => {
        const th = document.createElement('th');
        th.textContent = column.header;
        head.appendChild(th);
      });
      const body = table.createTBody();
      rows.forEach((row) => {
        const tr = body.insertRow();
        columns.forEach((column) => {
          const value = row[column.field];
          tr.insertCell().textContent = Array.isArray(value) ? value.join(', ') : (value ?? '');
        });
      });
      element.replaceChildren(table);
    };

    const renderWidget = (id, widget) => {
      const element = document.getElementById(id);
      if (!element) {
        return;
      }
      if (widget.kind === 'grid') {
        renderTable(element, widget.payload.columns, widget.payload.rows);
        return;
      }
      if (typeof echarts === 'undefined') {
        return;
      }
      const chart = echarts.getInstanceByDom(element) || echarts.init(element);
      chart.setOption(widget.payload, true);
      charts.push(chart);
    };

    const loadDashboard = async () => {
      const mounts = Array.from(document.querySelectorAll('[data-widget]')).map((el) => el.id);
      if (!mounts.length) {
        return;
      }
      const res = await fetch(`/api/dashboard?mounts=${encodeURIComponent(mounts.join(','))}`);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load stats');
      }
      const widgets = await res.json();
      Object.entries(widgets).forEach(([id, widget]) => renderWidget(id, widget));
    };

    const historyColumns = [
      { field: 'date', header: 'Date' },
      { field: 'location', header: 'Location' },
      { field: 'number', header: 'No.' },
      { field: 'friend_names', header: 'Friends' },
      { field: 'comment', header: 'Comment' },
      { field: 'pint_brand', header: 'Brand' },
      { field: 'pint_cost', header: 'Pint (£)' },
      { field: 'total_cost', header: 'Total (£)' }
    ];

    const loadHistory = async () => {
      const element = document.getElementById('history');
      if (!element) {
        return;
      }
      const res = await fetch('/records/');
      if (!res.ok) {
        throw new Error('Unable to load history');
      }
      renderTable(element, historyColumns, await res.json());
    };

    const form = document.getElementById('add-form');
    if (form) {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const data = Object.fromEntries(new FormData(form).entries());
        const payload = {
          ...data,
          friend_names: (data.friend_names || '').split(',')
        };
        setStatus('Saving...', 'info');
        fetch('/records/', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        })
          .then((res) => {
            if (!res.ok) {
              throw new Error('Something went wrong');
            }
            form.reset();
            setStatus('Pint successfully added!', 'ok');
            return loadHistory();
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    }

    window.addEventListener('resize', () => charts.forEach((chart) => chart.resize()));

    Promise.all([loadDashboard(), loadHistory()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
