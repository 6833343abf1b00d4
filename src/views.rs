use maud::{html, Markup, DOCTYPE};

use crate::types::quiz::{Quiz, QuizDetail, ANSWER_COUNT};

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                section { (content) }
            }
        }
    }
}

/// The list page: every quiz as a link to its detail page, with the create
/// form embedded below.
pub fn home(quizzes: &[Quiz]) -> Markup {
    layout(
        "All Quizzes",
        html! {
            h1 { "All Quizzes" }
            ul {
                @for quiz in quizzes {
                    li {
                        a href=(format!("/quiz/{}", quiz.id.0)) { (quiz.title) }
                    }
                }
            }
            (quiz_form())
        },
    )
}

fn quiz_form() -> Markup {
    html! {
        form method="post" action="/" {
            h3 { "Create Quiz" }
            label {
                "Title:"
                input type="text" name="title";
            }
            label {
                "Description:"
                input type="text" name="description";
            }
            label {
                "Question:"
                input type="text" name="question";
            }
            @for n in 1..=ANSWER_COUNT {
                label {
                    "Answer " (n) ":"
                    input type="text" name=(format!("answer-{}", n));
                    input type="checkbox" name=(format!("check-{}", n));
                }
            }
            button type="submit" { "Create Quiz" }
        }
    }
}

/// The detail page. Correctness indicators are rendered only when `reveal`
/// is set; otherwise the page carries a "Show Answer" control that re-requests
/// it with `show=true`.
pub fn quiz_detail(detail: &QuizDetail, reveal: bool) -> Markup {
    let quiz = &detail.quiz;
    layout(
        &quiz.title,
        html! {
            h1 { (quiz.title) }
            p { (quiz.description) }
            h2 { (quiz.question_text) }
            ul {
                @for answer in &detail.answers {
                    li {
                        (answer.answer_text)
                        @if reveal {
                            " "
                            @if answer.is_correct {
                                strong { "(correct)" }
                            } @else {
                                span { "(incorrect)" }
                            }
                        }
                    }
                }
            }
            @if !reveal {
                form method="get" action=(format!("/quiz/{}", quiz.id.0)) {
                    input type="hidden" name="show" value="true";
                    button type="submit" { "Show Answer" }
                }
            }
        },
    )
}
