use maud::{html, Markup, Render, DOCTYPE};

use crate::{icons, news::Article, search::PageContext};

pub fn layout(keyword: &str, main_content: Option<Markup>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta http-equiv="X-UA-Compatible" content="ie=edge";
                title {"News App Demo"}
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                main {
                    header {
                        a ."logo" href="/" { (icons::newspaper()) span {"News Demo"} }
                        form ."search-form" action="/search" method="GET" {
                            input ."search-input" type="search" name="q" value=(keyword)
                                placeholder="Enter a news topic" autofocus;
                            button ."search-button" type="submit" aria-label="Search" { (icons::search()) }
                        }
                    }
                    @if let Some(content) = main_content { (content) }
                }
            }
        }
    }
}

pub fn index_page() -> Markup {
    layout("", None)
}

pub fn results_page(context: &PageContext) -> Markup {
    let result = &context.result;

    layout(
        &context.query.keyword,
        Some(html! {
            section ."container" {
                ."result-count" {
                    @if result.total_results > 0 {
                        p {
                            "About " strong {(result.total_results)} " results were found. You are on page "
                            strong {(context.current_page())} " of " strong {(context.total_pages)} "."
                        }
                    } @else if !context.query.keyword.is_empty() {
                        p { "No results found for your query: " strong {(context.query.keyword)} "." }
                    }
                }
                ul ."search-results" {
                    @for article in &result.articles {
                        (article)
                    }
                }
                (pagination(context))
            }
        }),
    )
}

fn pagination(context: &PageContext) -> Markup {
    let pagebtn = |page: Option<u32>, text: &str, class: &str| -> Markup {
        html! {
            @if let Some(page) = page {
                form ."page-form" action="/search" method="GET" {
                    input type="hidden" name="q" value=(context.query.keyword);
                    input type="hidden" name="page" value=(page);
                    button ."button".(class) type="submit" {(text)}
                }
            }
        }
    };

    html! {
        ."pagination" {
            (pagebtn(context.previous_page(), "Previous", "previous-page"))
            (pagebtn(context.next_page(), "Next", "next-page"))
        }
    }
}

impl Render for Article {
    fn render(&self) -> Markup {
        html! {
            li ."news-article" data-source-id=[self.source.id_text()] {
                div {
                    a target="_blank" rel="noreferrer noopener" href=(self.url) {
                        h3 ."title" {(self.title)}
                    }
                    p ."description" {(self.summary())}
                    ."metadata" {
                        p ."source" {
                            (self.source.name)
                            @if !self.author.is_empty() { " · " (self.author) }
                        }
                        @if let Some(published_at) = self.published_at {
                            time ."published-date" datetime=(published_at.date().to_string()) {(self.format_published_date())}
                        }
                    }
                }
                @if !self.image_url.is_empty() {
                    img ."article-image" src=(self.image_url) alt="";
                }
            }
        }
    }
}
