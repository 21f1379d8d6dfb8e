pub mod report;
pub mod share_link;
