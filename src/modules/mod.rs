pub mod brain;
pub mod report;
