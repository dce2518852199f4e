// HTML shells for the guarded page routes. The real UI renders client-side
// and is out of scope here; these exist so page navigation has something to
// land on after the guard allows it.
use axum::response::Html;

fn shell(title: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title} - Fintrack</title></head>\n<body><div id=\"app\" data-page=\"{title}\"></div><script src=\"/assets/app.js\"></script></body>\n</html>\n"
    ))
}

pub async fn index() -> Html<String> {
    shell("Dashboard")
}

pub async fn login() -> Html<String> {
    shell("Login")
}

pub async fn register() -> Html<String> {
    shell("Register")
}

pub async fn income() -> Html<String> {
    shell("Income")
}

pub async fn expenses() -> Html<String> {
    shell("Expenses")
}

pub async fn payables() -> Html<String> {
    shell("Payables")
}

pub async fn receivables() -> Html<String> {
    shell("Receivables")
}
