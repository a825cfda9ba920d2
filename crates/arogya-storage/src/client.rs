use aws_sdk_s3::Client;

/// Build an `SdkConfig` from a region and optional named profile.
///
/// Credentials come from the default provider chain (environment, shared
/// config, instance metadata) unless a profile is named.
pub async fn build_config(region: &str, profile: Option<&str>) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(profile_name) = profile {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}

/// An S3 client for the loaded config.
pub fn s3_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
