//! Mock transport behavior and template selection.

use arogya_core::models::{AlertLevel, Channel, Language};
use arogya_messaging::sender::{MessageSender, MockSender};
use arogya_messaging::templates;

#[tokio::test]
async fn mock_sender_fabricates_distinct_provider_ids() {
    let sender = MockSender;

    let first = sender
        .send(Channel::Sms, "+919876543210", "hello")
        .await
        .expect("mock send never fails");
    let second = sender
        .send(Channel::WhatsApp, "+919876543210", "hello again")
        .await
        .expect("mock send never fails");

    assert!(first.starts_with("mock_"));
    assert!(second.starts_with("mock_"));
    assert_ne!(first, second);
}

#[test]
fn welcome_is_localized() {
    assert!(templates::welcome(Language::En).starts_with("Welcome to Arogya"));
    assert!(templates::welcome(Language::Hi).contains("स्वागत"));
}

#[test]
fn critical_alerts_read_as_urgent() {
    let critical = templates::risk_alert(Language::En, AlertLevel::Critical);
    let high = templates::risk_alert(Language::En, AlertLevel::High);

    assert!(critical.contains("urgent attention"));
    assert!(high.contains("follow-up"));
}
