//! src/routes/home.rs
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

#[tracing::instrument(name = "GET /")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HOME_HTML)
}

// The landing page keeps its own `joined` flag: once a submission is
// accepted (new or duplicate) the form flips to a confirmation view for the
// remainder of the session.
const HOME_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>MicroKahani</title>
    <style>
        body {
            margin: 0;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            background: #0c0a09;
            color: #fafaf9;
            font-family: system-ui, sans-serif;
            text-align: center;
        }
        h1 { font-size: 3.5rem; margin: 0 0 0.5rem; }
        h1 span { color: #d4a843; }
        .tagline { color: #a8a29e; font-size: 1.25rem; margin: 0 0 2rem; }
        form { display: flex; gap: 0.75rem; }
        input[type="email"] {
            padding: 0.75rem 1.25rem;
            border: 1px solid #44403c;
            border-radius: 0.75rem;
            background: #1c1917;
            color: inherit;
            min-width: 18rem;
        }
        button {
            padding: 0.75rem 2rem;
            border: none;
            border-radius: 0.75rem;
            background: #d4a843;
            color: #0c0a09;
            font-weight: 600;
            cursor: pointer;
        }
        button:disabled { opacity: 0.6; cursor: wait; }
        #notice { min-height: 1.5rem; margin-top: 1rem; }
        #notice.success { color: #4ade80; }
        #notice.info { color: #93c5fd; }
        #notice.warning { color: #fbbf24; }
        #notice.error { color: #f87171; }
    </style>
</head>
<body>
    <h1><span>Micro</span>Kahani</h1>
    <p class="tagline">Reel-sized dramas. Endless emotions.</p>
    <form id="waitlist-form" action="/waitlist" method="post">
        <input
            type="email"
            placeholder="Enter your email"
            name="email"
        >
        <button type="submit">Join Waitlist</button>
    </form>
    <p id="notice"></p>
    <script>
        const form = document.getElementById("waitlist-form");
        const notice = document.getElementById("notice");
        let submitting = false;
        let joined = false;

        form.addEventListener("submit", async (event) => {
            event.preventDefault();
            if (submitting || joined) {
                return;
            }

            submitting = true;
            form.querySelector("button").disabled = true;

            try {
                const response = await fetch("/waitlist", {
                    method: "POST",
                    headers: { "Content-Type": "application/x-www-form-urlencoded" },
                    body: new URLSearchParams(new FormData(form)),
                });
                const notification = await response.json();
                notice.className = notification.status;
                notice.textContent = notification.message;
                if (response.ok) {
                    joined = true;
                    form.replaceWith(notice);
                }
            } catch {
                notice.className = "error";
                notice.textContent = "Something went wrong. Please try again.";
            } finally {
                submitting = false;
                form.querySelector("button").disabled = joined;
                form.reset();
            }
        });
    </script>
</body>
</html>"##;
