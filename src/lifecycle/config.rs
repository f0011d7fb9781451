//! Session configuration.
//!
//! The defaults reproduce the classic cart behavior: every accepted command is published and any
//! integer quantity may be added. Hosts that keep settings in a file can deserialize a
//! [`CartConfig`] with serde; missing fields fall back to the defaults.

use crate::cart_actor::QuantityPolicy;
use crate::framework::PublishPolicy;
use serde::{Deserialize, Serialize};

/// Default capacity of the command channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Commands that may be queued before callers wait. Values below 1 are treated as 1.
    pub buffer_size: usize,
    /// Whether a remove that changed nothing still notifies subscribers.
    pub publish: PublishPolicy,
    /// Whether zero and negative quantities may be added.
    pub quantities: QuantityPolicy,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            publish: PublishPolicy::Always,
            quantities: QuantityPolicy::AcceptAny,
        }
    }
}

impl CartConfig {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_publish(mut self, publish: PublishPolicy) -> Self {
        self.publish = publish;
        self
    }

    pub fn with_quantities(mut self, quantities: QuantityPolicy) -> Self {
        self.quantities = quantities;
        self
    }

    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}
