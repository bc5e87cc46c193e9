use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::identity;

/// Root path handler. The body is a fixed literal that smoke tests match on
/// byte-for-byte.
pub async fn hello_world() -> Html<&'static str> {
    debug!("Root path accessed");

    Html("<p>Hello, World!</p>")
}

/// Human-readable host details page, built from a fresh identity resolution.
pub async fn details() -> Html<String> {
    debug!("Details page accessed");

    let identity = identity::resolve().await;

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pod Details</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 4rem auto;
            padding: 2rem;
            background: #f8f9fa;
            color: #333;
        }}
        .container {{
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }}
        h1 {{
            color: #2c3e50;
            border-bottom: 3px solid #3498db;
            padding-bottom: 0.5rem;
        }}
        .fact {{
            background: #f8f9fa;
            border-left: 4px solid #007bff;
            padding: 1rem;
            margin: 1rem 0;
            font-family: monospace;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Pod Details</h1>
        <div class="fact"><strong>Hostname:</strong> {hostname}</div>
        <div class="fact"><strong>IP Address:</strong> {ip_address}</div>
    </div>
</body>
</html>"#,
        hostname = identity.hostname,
        ip_address = identity.ip_address,
    ))
}

/// Not found handler for 404 errors
pub async fn not_found() -> Response {
    debug!("404 Not Found handler invoked");

    let html = Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>404 - Not Found</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 4rem auto;
            padding: 2rem;
            text-align: center;
            background: #f8f9fa;
            color: #333;
        }
        .container {
            background: white;
            padding: 3rem 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 {
            color: #e74c3c;
            font-size: 4rem;
            margin: 0;
        }
        h2 {
            color: #2c3e50;
            margin-top: 1rem;
        }
        p {
            color: #6c757d;
            line-height: 1.6;
        }
        a {
            color: #3498db;
            text-decoration: none;
            font-weight: 500;
        }
        a:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>404</h1>
        <h2>Page Not Found</h2>
        <p>The page you're looking for doesn't exist or has been moved.</p>
        <p><a href="/">Return to Home</a></p>
    </div>
</body>
</html>"#,
    );

    (StatusCode::NOT_FOUND, html).into_response()
}
