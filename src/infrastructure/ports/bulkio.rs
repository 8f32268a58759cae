//! Streaming data ports backed by the bulk I/O library

use crate::generation::{BuiltinPort, PortFactory, PortGenerator};
use crate::model::{Port, RepositoryId};

const BULKIO_NAMESPACE: &str = "BULKIO";
const DATA_PREFIX: &str = "data";

/// Element type of a bulk I/O data interface, e.g. `Float` for `dataFloat`
fn data_type(port: &Port) -> Option<String> {
    let repid: RepositoryId = port.repid.parse().ok()?;
    if repid.namespace() != BULKIO_NAMESPACE || repid.version() != "1.0" {
        return None;
    }
    repid
        .name()
        .strip_prefix(DATA_PREFIX)
        .filter(|ty| !ty.is_empty())
        .map(str::to_string)
}

/// Port class from the `bulkio` package, constructed with the port name
#[derive(Debug, Clone)]
pub struct BulkioPortGenerator {
    class: String,
}

impl BuiltinPort for BulkioPortGenerator {
    fn implementation(&self) -> String {
        self.class.clone()
    }

    fn constructor_args(&self, port: &Port) -> Vec<String> {
        vec![format!("\"{}\"", port.name)]
    }
}

/// Claims `IDL:BULKIO/data<Type>:1.0` ports
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkioPortFactory;

impl PortFactory for BulkioPortFactory {
    fn name(&self) -> &'static str {
        "bulkio"
    }

    fn matches(&self, port: &Port) -> bool {
        data_type(port).is_some()
    }

    fn generator(&self, port: &Port) -> Box<dyn PortGenerator> {
        let ty = data_type(port).unwrap_or_default();
        let side = if port.is_provides() { "In" } else { "Out" };
        Box::new(BulkioPortGenerator {
            class: format!("bulkio.{side}{ty}Port"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_data_interfaces_only() {
        let factory = BulkioPortFactory;
        assert!(factory.matches(&Port::provides("in", "IDL:BULKIO/dataFloat:1.0")));
        assert!(factory.matches(&Port::uses("out", "IDL:BULKIO/dataOctet:1.0")));
        assert!(!factory.matches(&Port::uses("out", "IDL:BULKIO/data:1.0")));
        assert!(!factory.matches(&Port::uses("out", "IDL:BULKIO/updateSRI:1.0")));
        assert!(!factory.matches(&Port::uses("out", "IDL:Vendor/dataFloat:1.0")));
        assert!(!factory.matches(&Port::uses("out", "not a repid")));
    }

    #[test]
    fn test_direction_selects_class() {
        let factory = BulkioPortFactory;

        let input = Port::provides("dataFloat_in", "IDL:BULKIO/dataFloat:1.0");
        let fragment = factory.generator(&input).fragment(&input);
        assert_eq!(fragment["class"], "bulkio.InFloatPort");
        assert_eq!(fragment["constructor_args"], json!(["\"dataFloat_in\""]));

        let output = Port::uses("dataShort_out", "IDL:BULKIO/dataShort:1.0");
        let fragment = factory.generator(&output).fragment(&output);
        assert_eq!(fragment["class"], "bulkio.OutShortPort");
    }
}
