//! `resolve` command implementation.

use anyhow::{Context, Result};
use contracts::{Group, Message, MessageFactory};
use serde::Serialize;
use tracing::info;

use super::build_factory;
use crate::cli::ResolveArgs;
use crate::error::CliError;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Resolved {
    Message { message: Message },
    Group { group: Group },
    NoGroup { msg_type: String, counter_tag: u32 },
}

/// Execute the `resolve` command
pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    info!(
        begin_string = %args.begin_string,
        msg_type = %args.msg_type,
        group_tag = ?args.group_tag,
        "Resolving through message factory"
    );

    let factory = build_factory(false);
    let resolved = match args.group_tag {
        Some(counter_tag) => {
            match factory
                .create_group(&args.begin_string, &args.msg_type, counter_tag)
                .map_err(CliError::from)?
            {
                Some(group) => Resolved::Group { group },
                None => Resolved::NoGroup {
                    msg_type: args.msg_type.clone(),
                    counter_tag,
                },
            }
        }
        None => Resolved::Message {
            message: factory.create(&args.begin_string, &args.msg_type),
        },
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&resolved).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        print_resolved(&resolved);
    }

    Ok(())
}

fn print_resolved(resolved: &Resolved) {
    match resolved {
        Resolved::Message { message } => {
            println!("Message ({} fields)", message.field_count());
            for (section, fields) in [
                ("header", &message.header),
                ("body", &message.body),
                ("trailer", &message.trailer),
            ] {
                for (tag, value) in fields.iter() {
                    println!("  {section:<7} {tag}={value}");
                }
            }
        }
        Resolved::Group { group } => {
            println!("Group {}", group.counter_tag());
            println!("  delimiter: {}", group.delimiter());
            println!("  field order: {:?}", group.field_order());
        }
        Resolved::NoGroup {
            msg_type,
            counter_tag,
        } => {
            println!("No group {} defined for MsgType {}", counter_tag, msg_type);
        }
    }
}
