//! UI components for the activity board.

pub mod activity_card;
pub mod activity_list;
pub mod feedback_banner;
pub mod signup_form;
