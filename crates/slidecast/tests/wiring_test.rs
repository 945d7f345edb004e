use slidecast::{deck_generator, ProviderErrorKind, SlidecastConfig, SlidecastErrorKind};

#[test]
fn test_missing_api_key_is_reported() {
    let mut config = SlidecastConfig::bundled().unwrap();
    config.language_model.api_key_env = "SLIDECAST_TEST_MISSING_KEY".to_string();

    let err = deck_generator(&config).err().unwrap();
    match err.kind() {
        SlidecastErrorKind::Provider(e) => {
            assert_eq!(
                e.kind,
                ProviderErrorKind::MissingApiKey("SLIDECAST_TEST_MISSING_KEY".to_string())
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}
