//! Message-event ports, bound to the framework's built-in consumer and supplier

use serde::{Deserialize, Serialize};

use crate::generation::{BuiltinPort, Language, PortFactory, PortGenerator};
use crate::model::Port;

/// Repository id of the structured message event interface
pub const MESSAGE_EVENT_REPID: &str = "IDL:ExtendedEvent/MessageEvent:1.0";

/// Default seconds between consumer polls
pub const DEFAULT_POLL_INTERVAL: f64 = 0.1;

/// Settings of the generated message consumer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MessageConsumerConfig {
    pub poll_interval: f64,
}

impl Default for MessageConsumerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

fn events_module(language: Language) -> &'static str {
    match language {
        Language::Java => "org.ossie.events",
        Language::Python => "ossie.events",
    }
}

/// Provides side of a message-event port
#[derive(Debug, Clone)]
pub struct MessageConsumerPortGenerator {
    language: Language,
    config: MessageConsumerConfig,
}

impl MessageConsumerPortGenerator {
    pub fn new(language: Language, config: MessageConsumerConfig) -> Self {
        Self { language, config }
    }

    pub fn config(&self) -> &MessageConsumerConfig {
        &self.config
    }
}

impl BuiltinPort for MessageConsumerPortGenerator {
    fn implementation(&self) -> String {
        format!("{}.MessageConsumerPort", events_module(self.language))
    }

    fn constructor_args(&self, port: &Port) -> Vec<String> {
        match self.language {
            Language::Python => vec![format!("thread_sleep={}", self.config.poll_interval)],
            Language::Java => vec![
                format!("\"{}\"", port.name),
                self.config.poll_interval.to_string(),
            ],
        }
    }
}

/// Uses side of a message-event port
#[derive(Debug, Clone)]
pub struct MessageSupplierPortGenerator {
    language: Language,
}

impl MessageSupplierPortGenerator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl BuiltinPort for MessageSupplierPortGenerator {
    fn implementation(&self) -> String {
        format!("{}.MessageSupplierPort", events_module(self.language))
    }

    fn constructor_args(&self, port: &Port) -> Vec<String> {
        match self.language {
            Language::Python => Vec::new(),
            Language::Java => vec![format!("\"{}\"", port.name)],
        }
    }
}

/// Claims message-event ports in either direction
#[derive(Debug, Clone)]
pub struct MessagePortFactory {
    language: Language,
    config: MessageConsumerConfig,
}

impl MessagePortFactory {
    pub fn new(language: Language, config: MessageConsumerConfig) -> Self {
        Self { language, config }
    }
}

impl PortFactory for MessagePortFactory {
    fn name(&self) -> &'static str {
        "message"
    }

    fn matches(&self, port: &Port) -> bool {
        port.repid == MESSAGE_EVENT_REPID
    }

    fn generator(&self, port: &Port) -> Box<dyn PortGenerator> {
        if port.is_provides() {
            Box::new(MessageConsumerPortGenerator::new(self.language, self.config))
        } else {
            Box::new(MessageSupplierPortGenerator::new(self.language))
        }
    }
}
