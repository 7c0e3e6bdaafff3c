pub mod config;
pub mod file_format;
pub mod provider;

pub use config::NestidxConfig;
pub use file_format::FileFormat;
pub use provider::ProviderKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_provider_and_json_snapshots() {
        let cfg = NestidxConfig::default();
        assert_eq!(cfg.provider(), None);
        assert_eq!(cfg.snapshot_format(), FileFormat::Json);
    }

    #[test]
    fn overrides_work_via_struct_update() {
        let cfg = NestidxConfig {
            provider: Some(ProviderKind::Postgres),
            ..Default::default()
        };

        assert_eq!(cfg.provider(), Some(ProviderKind::Postgres));
        assert_eq!(cfg.snapshot_format(), FileFormat::Json);
    }
}
