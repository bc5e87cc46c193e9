use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Point-in-time copy of the process environment.
///
/// Keys are sorted, so two dumps of an unchanged environment serialize to
/// identical JSON regardless of how the variables were inserted.
pub type EnvironmentMap = BTreeMap<String, String>;

/// Placeholder reported for orchestration fields when the corresponding
/// environment variable is absent. The literal text is part of the API
/// contract and must not change.
pub const NOT_IN_KUBERNETES: &str = "Not running in Kubernetes";

/// Host identity as observed from inside the container.
///
/// Constructed fresh on every request; hostnames are not stable across
/// container rescheduling, so nothing here is cached.
#[derive(Debug, Clone, Serialize)]
pub struct HostIdentity {
    /// Machine hostname, or `"Unknown"` when resolution failed
    pub hostname: String,

    /// Resolved IP address, or the failure description when resolution failed
    pub ip_address: String,
}

impl HostIdentity {
    /// Degraded identity substituted when hostname or address resolution
    /// fails. The failure text rides in the IP field so the endpoint can
    /// still answer 200 with best-effort data.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            hostname: "Unknown".to_string(),
            ip_address: reason.into(),
        }
    }
}

/// Resource utilization sampled at call time.
///
/// The three percentages are taken in the same request but have no
/// relationship beyond that; each is independently clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceSample {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
}

impl ResourceSample {
    pub fn clamped(cpu_percent: f64, memory_percent: f64, disk_percent: f64) -> Self {
        Self {
            cpu_percent: cpu_percent.clamp(0.0, 100.0),
            memory_percent: memory_percent.clamp(0.0, 100.0),
            disk_percent: disk_percent.clamp(0.0, 100.0),
        }
    }
}

/// Combined network information: host identity merged with the orchestration
/// context Kubernetes injects via the downward API.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkDetails {
    pub hostname: String,
    pub host_ip: String,
    pub pod_ip: String,
    pub node_name: String,
}

impl NetworkDetails {
    /// Merge a resolved identity with `POD_IP`/`NODE_NAME` values read from
    /// the environment, substituting the fixed placeholder for absent ones.
    pub fn compose(
        identity: HostIdentity,
        pod_ip: Option<String>,
        node_name: Option<String>,
    ) -> Self {
        Self {
            hostname: identity.hostname,
            host_ip: identity.ip_address,
            pod_ip: pod_ip.unwrap_or_else(|| NOT_IN_KUBERNETES.to_string()),
            node_name: node_name.unwrap_or_else(|| NOT_IN_KUBERNETES.to_string()),
        }
    }
}

/// Outcome of one upstream joke fetch. Exactly one variant is populated;
/// transport and payload failures are folded into `Err` before this value
/// leaves the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub enum JokeResult {
    /// 2xx upstream response with a parseable JSON body, passed through
    /// unchanged
    Ok(Value),

    /// Timeout, connection failure, non-2xx status, or unparseable body
    Err(String),
}

impl JokeResult {
    /// Response body for the endpoint: the upstream payload on success, an
    /// `{"error": ...}` object otherwise. Rendered with status 200 either
    /// way so consumers never special-case transport failures.
    pub fn into_body(self) -> Value {
        match self {
            JokeResult::Ok(payload) => payload,
            JokeResult::Err(message) => json!({ "error": message }),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, JokeResult::Ok(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_identity() {
        let identity = HostIdentity::degraded("resolution failed: no such host");
        assert_eq!(identity.hostname, "Unknown");
        assert_eq!(identity.ip_address, "resolution failed: no such host");
    }

    #[test]
    fn test_identity_serialization_field_names() {
        let identity = HostIdentity {
            hostname: "pod-abc".to_string(),
            ip_address: "10.1.2.3".to_string(),
        };
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["hostname"], "pod-abc");
        assert_eq!(value["ip_address"], "10.1.2.3");
    }

    #[test]
    fn test_sample_clamping() {
        let sample = ResourceSample::clamped(-3.0, 142.5, 55.5);
        assert_eq!(sample.cpu_percent, 0.0);
        assert_eq!(sample.memory_percent, 100.0);
        assert_eq!(sample.disk_percent, 55.5);
    }

    #[test]
    fn test_network_details_placeholders() {
        let identity = HostIdentity {
            hostname: "pod-abc".to_string(),
            ip_address: "10.1.2.3".to_string(),
        };
        let details = NetworkDetails::compose(identity, None, None);
        assert_eq!(details.pod_ip, NOT_IN_KUBERNETES);
        assert_eq!(details.node_name, NOT_IN_KUBERNETES);
        assert_eq!(details.hostname, "pod-abc");
        assert_eq!(details.host_ip, "10.1.2.3");
    }

    #[test]
    fn test_network_details_with_orchestration_context() {
        let identity = HostIdentity {
            hostname: "pod-abc".to_string(),
            ip_address: "10.1.2.3".to_string(),
        };
        let details = NetworkDetails::compose(
            identity,
            Some("10.42.0.7".to_string()),
            Some("node-1".to_string()),
        );
        assert_eq!(details.pod_ip, "10.42.0.7");
        assert_eq!(details.node_name, "node-1");
    }

    #[test]
    fn test_joke_result_success_body_is_payload() {
        let payload = json!({"id": 1, "joke": "x"});
        let result = JokeResult::Ok(payload.clone());
        assert!(result.is_ok());
        assert_eq!(result.into_body(), payload);
    }

    #[test]
    fn test_joke_result_error_body_shape() {
        let result = JokeResult::Err("connection refused".to_string());
        assert!(!result.is_ok());
        let body = result.into_body();
        assert_eq!(body["error"], "connection refused");
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_environment_map_is_sorted() {
        let mut map = EnvironmentMap::new();
        map.insert("ZULU".to_string(), "1".to_string());
        map.insert("ALPHA".to_string(), "1".to_string());
        let rendered = serde_json::to_string(&map).unwrap();
        assert!(rendered.find("ALPHA").unwrap() < rendered.find("ZULU").unwrap());
    }
}
