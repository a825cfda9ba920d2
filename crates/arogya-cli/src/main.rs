//! Arogya operator CLI.
//!
//! Wires the library crates together for local runs and support work:
//! scoring an indicator file, browsing a user's prediction history, the
//! clinician high-risk view, subscription management, chatbot sessions,
//! and session-token utilities.
//!
//! Usage:
//!   arogya predict --user u_123 --input indicators.json --store
//!   arogya history --user u_123 --limit 5
//!   arogya high-risk
//!   arogya trends --user u_123 --disease diabetes
//!   arogya subscribe --phone 9876543210 --language hi
//!   arogya chat --user u_123 --persona mental-health "I can't sleep"
//!
//! AWS credentials come from the default provider chain; the bucket from
//! `--bucket` or `AROGYA_BUCKET`.

use clap::{Parser, Subcommand, ValueEnum};
use eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use arogya_audit::AuditEvent;
use arogya_chat::chat::{self, ChatMessage, ChatRole};
use arogya_chat::persona;
use arogya_core::models::{BotKind, Channel, Disease, HealthIndicators, Language, Prediction};
use arogya_messaging::flows;
use arogya_messaging::sender::MockSender;
use arogya_risk::plan;
use arogya_storage::{chat_logs, client, predictions, subscriptions};

// ── CLI definition ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "arogya", about = "Arogya health platform operator CLI")]
struct Cli {
    /// AWS region.
    #[arg(long, global = true, default_value = "ap-south-1")]
    region: String,

    /// Named AWS profile; defaults to the ambient credential chain.
    #[arg(long, global = true)]
    profile: Option<String>,

    /// S3 bucket holding Arogya records.
    #[arg(long, global = true, env = "AROGYA_BUCKET")]
    bucket: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an indicator file and print the assessment.
    Predict {
        #[arg(long)]
        user: String,
        /// Path to a HealthIndicators JSON file.
        #[arg(long)]
        input: String,
        /// Also persist the prediction (and raise any alert).
        #[arg(long)]
        store: bool,
    },
    /// A user's stored predictions, newest first.
    History {
        #[arg(long)]
        user: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Recent high/critical predictions across all users.
    HighRisk {
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Risk score trend for one user and disease.
    Trends {
        #[arg(long)]
        user: String,
        /// diabetes, heart_failure, or cancer.
        #[arg(long)]
        disease: Disease,
    },
    /// Subscribe a phone number to health alerts.
    Subscribe {
        #[arg(long)]
        phone: String,
        #[arg(long, value_enum, default_value = "en")]
        language: LanguageArg,
        /// Service tags, repeatable.
        #[arg(long = "service")]
        services: Vec<String>,
    },
    /// Unsubscribe a phone number.
    Unsubscribe {
        #[arg(long)]
        phone: String,
    },
    /// All active subscribers.
    Subscribers,
    /// Send a one-off message through the configured transport.
    Send {
        #[arg(long)]
        phone: String,
        #[arg(long, value_enum, default_value = "sms")]
        channel: ChannelArg,
        #[arg(long)]
        body: String,
    },
    /// Recent outbound message logs, newest first.
    MessageLogs {
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// A user's chatbot history, newest first.
    ChatLogs {
        #[arg(long)]
        user: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// One chatbot exchange; the log is persisted.
    Chat {
        #[arg(long)]
        user: String,
        #[arg(long, value_enum, default_value = "general-health")]
        persona: PersonaArg,
        /// Response language.
        #[arg(long, value_enum, default_value = "en")]
        language: LanguageArg,
        /// Bedrock inference profile id; discovered when omitted.
        #[arg(long)]
        model: Option<String>,
        message: String,
    },
    /// List available chat models.
    Models,
    /// Issue or verify session tokens (secret from AROGYA_JWT_SECRET).
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

#[derive(Subcommand)]
enum TokenCommand {
    Issue {
        #[arg(long)]
        user: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = 24)]
        ttl_hours: u64,
    },
    Verify {
        token: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    En,
    Hi,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Hi => Language::Hi,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ChannelArg {
    Sms,
    Whatsapp,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Sms => Channel::Sms,
            ChannelArg::Whatsapp => Channel::WhatsApp,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PersonaArg {
    GeneralHealth,
    MentalHealth,
}

impl From<PersonaArg> for BotKind {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::GeneralHealth => BotKind::GeneralHealth,
            PersonaArg::MentalHealth => BotKind::MentalHealth,
        }
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Predict { user, input, store } => {
            let raw = std::fs::read_to_string(&input)
                .wrap_err_with(|| format!("failed to read {input}"))?;
            let indicators: HealthIndicators =
                serde_json::from_str(&raw).wrap_err("invalid indicators file")?;

            let assessment = arogya_risk::predict(&indicators);
            let preventive_plan = plan::generate(&assessment.risks, assessment.alert_level);

            let prediction = Prediction {
                id: Uuid::new_v4(),
                user_id: user.clone(),
                indicators,
                risks: assessment.risks,
                overall_risk_score: assessment.overall_risk_score,
                alert_level: assessment.alert_level,
                preventive_plan,
                created_at: jiff::Timestamp::now(),
            };

            if store {
                let (s3, bucket) = storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket)
                    .await?;
                predictions::save(&s3, &bucket, &prediction).await?;

                AuditEvent::new(
                    "prediction.store",
                    "prediction",
                    prediction.id.to_string(),
                    user.as_str(),
                )
                .emit();
                if prediction.alert_level.is_actionable() {
                    AuditEvent::new(
                        "alert.raise",
                        "prediction",
                        prediction.id.to_string(),
                        user.as_str(),
                    )
                        .with_details(serde_json::json!({
                            "alert_level": prediction.alert_level,
                            "overall_risk_score": prediction.overall_risk_score,
                        }))
                        .emit();
                }
            }

            print_json(&prediction)?;
        }

        Command::History { user, limit } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let records = predictions::history(&s3, &bucket, &user, limit).await?;
            print_json(&records)?;
        }

        Command::HighRisk { limit } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let records = predictions::high_risk(&s3, &bucket, limit).await?;
            print_json(&records)?;
        }

        Command::Trends { user, disease } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let series = predictions::trends(&s3, &bucket, &user, disease).await?;
            print_json(&series)?;
        }

        Command::Subscribe {
            phone,
            language,
            services,
        } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let subscription =
                flows::subscribe(&s3, &bucket, &MockSender, &phone, language.into(), services)
                    .await?;
            print_json(&subscription)?;
        }

        Command::Unsubscribe { phone } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            match flows::unsubscribe(&s3, &bucket, &phone).await? {
                Some(subscription) => print_json(&subscription)?,
                None => println!("not subscribed: {phone}"),
            }
        }

        Command::Subscribers => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let subscribers = subscriptions::list_active(&s3, &bucket).await?;
            print_json(&subscribers)?;
        }

        Command::Send {
            phone,
            channel,
            body,
        } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let log =
                flows::send_message(&s3, &bucket, &MockSender, channel.into(), &phone, &body)
                    .await?;
            print_json(&log)?;
        }

        Command::MessageLogs { limit } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let logs = subscriptions::recent_messages(&s3, &bucket, limit).await?;
            print_json(&logs)?;
        }

        Command::ChatLogs { user, limit } => {
            let (s3, bucket) =
                storage_handle(&cli.region, cli.profile.as_deref(), &cli.bucket).await?;
            let logs = chat_logs::list(&s3, &bucket, &user, limit).await?;
            print_json(&logs)?;
        }

        Command::Chat {
            user,
            persona,
            language,
            model,
            message,
        } => {
            let config = client::build_config(&cli.region, cli.profile.as_deref()).await;
            let bot: BotKind = persona.into();

            let model_id = match model {
                Some(id) => id,
                None => chat::list_chat_models(&config)
                    .await?
                    .into_iter()
                    .next()
                    .map(|m| m.model_id)
                    .ok_or_else(|| eyre!("no chat models available"))?,
            };

            let system_prompt =
                persona::with_language(persona::system_prompt(bot), language.into());
            let history = vec![ChatMessage {
                role: ChatRole::User,
                content: message.clone(),
            }];
            let response = chat::converse(&config, &model_id, &system_prompt, &history).await?;

            let log = chat::log_exchange(&user, bot, &message, &response);
            let (s3, bucket) = match &cli.bucket {
                Some(bucket) => (client::s3_client(&config), bucket.clone()),
                None => {
                    println!("{response}");
                    return Ok(());
                }
            };
            chat_logs::append(&s3, &bucket, &log).await?;

            println!("{response}");
        }

        Command::Models => {
            let config = client::build_config(&cli.region, cli.profile.as_deref()).await;
            let models = chat::list_chat_models(&config).await?;
            print_json(&models)?;
        }

        Command::Token { command } => {
            let secret = std::env::var("AROGYA_JWT_SECRET")
                .wrap_err("AROGYA_JWT_SECRET must be set for token commands")?;

            match command {
                TokenCommand::Issue {
                    user,
                    email,
                    ttl_hours,
                } => {
                    let token = arogya_auth::issue_token(
                        &user,
                        &email,
                        secret.as_bytes(),
                        std::time::Duration::from_secs(ttl_hours * 3600),
                    )?;
                    println!("{token}");
                }
                TokenCommand::Verify { token } => {
                    let claims = arogya_auth::validate_token(&token, secret.as_bytes())?;
                    print_json(&claims)?;
                }
            }
        }
    }

    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Build the S3 client and resolve the bucket, or explain what's missing.
async fn storage_handle(
    region: &str,
    profile: Option<&str>,
    bucket: &Option<String>,
) -> Result<(aws_sdk_s3::Client, String)> {
    let bucket = bucket
        .clone()
        .ok_or_else(|| eyre!("--bucket or AROGYA_BUCKET is required for this command"))?;

    let config = client::build_config(region, profile).await;
    Ok((client::s3_client(&config), bucket))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
