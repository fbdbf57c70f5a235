pub mod deal_service;
pub mod draft_service;
