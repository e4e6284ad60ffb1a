//! Product pillars and the information overlay

pub mod catalog;
pub mod presenter;
pub mod record;

pub use catalog::PillarCatalog;
pub use presenter::{ModalContent, PillarModalPresenter};
pub use record::{PainPoint, PillarDemo, PillarDemoAction, PillarRecord};
