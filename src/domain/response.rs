use crate::domain::model::{Match, Message};
use crate::domain::value::PageToken;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One page of the match list, in server order.
///
/// `next_page_token` is `None` on the final page. Pagination continuation is
/// the caller's responsibility; pages are never merged or deduplicated here.
pub struct MatchesPage {
    pub matches: Vec<Match>,
    pub next_page_token: Option<PageToken>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One page of a match's message history, in server order.
///
/// `next_page_token` is `None` on the final page.
pub struct MessagesPage {
    pub messages: Vec<Message>,
    pub next_page_token: Option<PageToken>,
}
