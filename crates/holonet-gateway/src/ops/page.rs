//! Landing page. The button calls `/api`; results land on the server console.

use crate::app_state::AppState;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Star Wars API Demo</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
        h1 { color: #FFE81F; background-color: #000; padding: 10px; }
        button { background-color: #FFE81F; border: none; padding: 10px 20px; cursor: pointer; }
        .footer { margin-top: 50px; font-size: 12px; color: #666; }
        pre { background: #f4f4f4; padding: 10px; border-radius: 5px; }
    </style>
</head>
<body>
    <h1>Star Wars API Demo</h1>
    <p>This page demonstrates fetching data from the Star Wars API.</p>
    <p>Check your console for the API results.</p>
    <button onclick="fetchData()">Fetch Star Wars Data</button>
    <div id="results"></div>
    <script>
        function fetchData() {
            const results = document.getElementById('results');
            results.innerHTML = '<p>Loading data...</p>';
            fetch('/api')
                .then(res => res.text())
                .then(() => {
                    alert('API request made! Check server console.');
                    results.innerHTML = '<p>Data fetched! Check server console.</p>';
                })
                .catch(err => {
                    results.innerHTML = '<p>Error: ' + err.message + '</p>';
                });
        }
    </script>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Render the page with a footer reflecting the current counters.
pub fn render(state: &AppState) -> String {
    let stats = state.stats();
    let footer = format!(
        concat!(
            "    <div class=\"footer\">\n",
            "        <p>API calls: {} | Cache entries: {} | Errors: {}</p>\n",
            "        <pre>Debug mode: {} | Timeout: {}ms</pre>\n",
            "    </div>\n",
        ),
        stats.api_calls,
        stats.cache_size,
        stats.errors,
        if stats.debug { "ON" } else { "OFF" },
        stats.timeout,
    );

    let mut html = String::with_capacity(HEAD.len() + footer.len() + TAIL.len());
    html.push_str(HEAD);
    html.push_str(&footer);
    html.push_str(TAIL);
    html
}
