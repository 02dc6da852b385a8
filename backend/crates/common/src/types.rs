use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity reported by a running service on `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_get_distinct_ids() {
        let a = ServiceInfo::new("copo-api");
        let b = ServiceInfo::new("copo-api");
        assert_eq!(a.name, "copo-api");
        assert!(!a.version.is_empty());
        assert_ne!(a.instance_id, b.instance_id);
    }
}
