pub mod issue_badge;
pub mod progress_bar;
pub mod score_card;
pub mod seller_analysis;
pub mod toast;
pub mod trust_score;
pub mod url_input;
