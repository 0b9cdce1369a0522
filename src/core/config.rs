//! Mining configuration as delivered by the backend's `get_config`
//!
//! The backend owns persistence; this layer only reads the pool
//! selection to gate setup and populate the settings form.

use serde::{Deserialize, Serialize};

/// Configuration object returned by `get_config`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MinerConfig {
    pub pool: Option<Pool>,
    #[serde(default)]
    pub xmrig: Option<XmrigConfig>,
}

impl MinerConfig {
    /// Setup is complete iff a local pool has a Monero address, or a
    /// remote pool is selected at all.
    pub fn setup_complete(&self) -> bool {
        match &self.pool {
            Some(Pool::Local { monero_address, .. }) => !monero_address.is_empty(),
            Some(Pool::Remote { .. }) => true,
            None => false,
        }
    }

    /// Local pool fields for the settings form, if present
    pub fn local_pool(&self) -> Option<(&str, &str)> {
        match &self.pool {
            Some(Pool::Local {
                monero_address,
                blockchain_dir,
                ..
            }) => Some((monero_address, blockchain_dir)),
            _ => None,
        }
    }
}

/// Pool selection: a locally hosted P2Pool stack or a remote pool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum Pool {
    Local {
        // Absent on a fresh install; the wizard fills them in
        #[serde(default)]
        monero_address: String,
        #[serde(default)]
        blockchain_dir: String,
        #[serde(default)]
        chain: P2poolChain,
        /// Verbosity of P2Pool, an integer between 0 and 6
        #[serde(default)]
        verbosity: u8,
    },
    Remote {
        ip: String,
        port: u16,
    },
}

/// Which P2Pool sidechain to mine on
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub enum P2poolChain {
    #[default]
    Main,
    Mini,
}

/// Miner process options carried opaquely through the config
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct XmrigConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub bearer_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MinerConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_setup_complete_local_with_address() {
        let config = parse(
            r#"{"pool":{"Local":{"monero_address":"4xyz...","blockchain_dir":"/blocks"}}}"#,
        );
        assert!(config.setup_complete());
    }

    #[test]
    fn test_setup_incomplete_local_empty_address() {
        let config =
            parse(r#"{"pool":{"Local":{"monero_address":"","blockchain_dir":"/blocks"}}}"#);
        assert!(!config.setup_complete());
    }

    #[test]
    fn test_setup_incomplete_local_missing_fields() {
        // Fresh install: the backend reports a local pool with nothing
        // filled in yet
        let config = parse(r#"{"pool":{"Local":{}}}"#);
        assert!(!config.setup_complete());
        assert_eq!(config.local_pool(), Some(("", "")));
    }

    #[test]
    fn test_setup_complete_remote() {
        let config = parse(r#"{"pool":{"Remote":{"ip":"10.0.0.2","port":3333}}}"#);
        assert!(config.setup_complete());
    }

    #[test]
    fn test_setup_incomplete_no_pool() {
        let config = parse(r#"{"pool":null}"#);
        assert!(!config.setup_complete());
    }

    #[test]
    fn test_local_pool_fields() {
        let config = parse(
            r#"{"pool":{"Local":{"monero_address":"4abc","blockchain_dir":"/mnt/xmr"}}}"#,
        );
        assert_eq!(config.local_pool(), Some(("4abc", "/mnt/xmr")));

        let remote = parse(r#"{"pool":{"Remote":{"ip":"10.0.0.2","port":3333}}}"#);
        assert_eq!(remote.local_pool(), None);
    }

    #[test]
    fn test_extra_local_fields_round_trip() {
        let config = parse(
            r#"{"pool":{"Local":{"monero_address":"4abc","blockchain_dir":"/b","chain":"Mini","verbosity":3}}}"#,
        );
        match config.pool {
            Some(Pool::Local { verbosity, .. }) => assert_eq!(verbosity, 3),
            _ => panic!("expected local pool"),
        }
    }
}
