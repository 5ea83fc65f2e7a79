use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Find verified rental homes across Nigeria and connect directly with landlords. No agents, no fees.";
                title { (title) " | House Matters" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    div class="container header-inner" {
                        a href="/" class="brand" {
                            svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="24"
                                height="24"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                aria-hidden="true"
                            {
                                path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                                path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                                path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                                path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                            }
                            span { "House Matters" }
                        }
                        nav {
                            ul {
                                li { a href="/#listings" { "Find a Home" } }
                                li { a href="/#how-it-works" { "How It Works" } }
                                li { a href="/list-property" { "List Property" } }
                            }
                        }
                        a href="/signup" class="btn btn-primary" { "Get Started" }
                    }
                }
                main { (content) }
            }
        }
    }
}
