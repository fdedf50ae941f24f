//! Startup banner printed once the listener is bound.

const INNER_WIDTH: usize = 59;

/// Render the fixed startup banner with the resolved port and base URL.
pub fn render(port: u16, database_status: &str) -> String {
    let base_url = format!("http://localhost:{port}");
    let rule = "═".repeat(INNER_WIDTH);

    let mut lines = Vec::new();
    lines.push(format!("╔{rule}╗"));
    lines.push(format!("║{:^width$}║", "Yatra API Server", width = INNER_WIDTH));
    lines.push(format!("╠{rule}╣"));
    lines.push(row("Status:", "Running"));
    lines.push(row("Port:", &port.to_string()));
    lines.push(row("Base URL:", &base_url));
    lines.push(row("API Root:", &format!("{base_url}/api")));
    lines.push(row("Database:", database_status));
    lines.push(format!("╚{rule}╝"));

    lines.join("\n")
}

fn row(label: &str, value: &str) -> String {
    format!("║  {label:<11}{value:<46}║")
}
