use crate::core::domain::ReaderId;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Sync + Send {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn borrower_id(&self) -> Option<ReaderId>;

    fn status(&self) -> BookStatus {
        if self.borrower_id().is_some() {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }
}
