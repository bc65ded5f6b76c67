//! 维修技术员。

use crate::error::DomainError;
use crate::identity::Entity;
use crate::validation::{optional_text, required_text};

/// 技术员，被工单动作日志和指派引用，不归属于任何工单。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technician {
    id: String,
    name: String,
    contact: String,
}

impl Technician {
    pub fn new(id: impl Into<String>, name: &str, contact: &str) -> Result<Self, DomainError> {
        let name = required_text(name, "name")?;
        Ok(Self {
            id: id.into(),
            name,
            contact: optional_text(contact),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// 动作日志中的操作者标签：`name(id)`。
    pub fn actor_label(&self) -> String {
        format!("{}({})", self.name, self.id)
    }
}

impl Entity for Technician {
    fn id(&self) -> &str {
        &self.id
    }
}
