use axum::response::Html;

const ACCESS_DENIED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Access Denied</title>
  <style>
    body { font-family: system-ui, sans-serif; display: flex; align-items: center;
           justify-content: center; min-height: 100vh; margin: 0; background: #f5f6f8; }
    main { max-width: 28rem; padding: 2rem; text-align: center; background: #fff;
           border-radius: 8px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.1); }
    h1 { margin-top: 0; color: #b42318; }
  </style>
</head>
<body>
  <main>
    <h1>Access Denied</h1>
    <p>Your session is missing or has expired.</p>
    <p>Please open the dashboard again from your company portal.</p>
  </main>
</body>
</html>
"#;

/// GET /unauthorized - landing page for rejected navigations
pub async fn unauthorized_page() -> Html<&'static str> {
    Html(ACCESS_DENIED_PAGE)
}
