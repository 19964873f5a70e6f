//! Flowshop domain models.
//!
//! | u-flowshop | Manufacturing | Meaning |
//! |------------|---------------|---------|
//! | `FlowshopInstance` | Routing sheet | Jobs × machines processing-time table |
//! | `JobOrder` | Dispatch list | Sequence applied on every machine |

mod instance;
mod order;

pub use instance::{FlowshopInstance, InstanceHeader};
pub use order::JobOrder;
