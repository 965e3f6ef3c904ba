//! # Integration Tests
//!
//! Cross-crate integration and end-to-end tests.
//!
//! Covers:
//! - Factory dispatch (hit, fallback, FIXT.1.1 aliasing)
//! - Plugin discovery running once per process
//! - Settings -> log factory -> composite log, end to end

#[cfg(test)]
mod dispatch_tests {
    use std::sync::{Arc, Mutex};

    use contracts::begin_string::{FIX42, FIX44, FIX50, FIX50SP2, FIXT11};
    use contracts::{tags, FactoryError, Group, Message, MessageFactory};
    use dialects::{CustomGroupMessageFactory, GroupSpec};
    use message_factory::{DefaultMessageFactory, ExportedType, ProviderModule};

    fn builtin() -> DefaultMessageFactory {
        DefaultMessageFactory::from_factories(dialects::builtin_factories())
    }

    /// Provider recording every call it receives
    #[derive(Default)]
    struct Spy {
        begin_strings: Vec<String>,
        calls: Mutex<Vec<String>>,
    }

    impl Spy {
        fn serving(begin_strings: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                begin_strings: begin_strings.iter().map(|s| s.to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MessageFactory for Spy {
        fn supported_begin_strings(&self) -> Vec<String> {
            self.begin_strings.clone()
        }

        fn create(&self, begin_string: &str, msg_type: &str) -> Message {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create {begin_string} {msg_type}"));
            let mut message = Message::with_msg_type(msg_type);
            message.body.set_field(58, "spy");
            message
        }

        fn create_group(
            &self,
            begin_string: &str,
            msg_type: &str,
            counter_tag: u32,
        ) -> Result<Option<Group>, FactoryError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("group {begin_string} {msg_type} {counter_tag}"));
            Ok(Some(Group::new(counter_tag, 1, vec![1])))
        }
    }

    #[test]
    fn test_builtin_begin_strings() {
        assert_eq!(builtin().supported_begin_strings().len(), 9);
    }

    #[test]
    fn test_hit_delegates_to_provider() {
        let message = builtin().create(FIX44, "D");
        assert_eq!(message.begin_string(), Some(FIX44));
        assert_eq!(message.msg_type(), Some("D"));
    }

    #[test]
    fn test_miss_returns_bare_message() {
        let message = builtin().create("ACME.1.0", "D");
        assert_eq!(message.msg_type(), Some("D"));
        assert_eq!(message.field_count(), 1);
        assert!(!message.header.is_set(tags::BEGIN_STRING));
    }

    #[test]
    fn test_fixt_application_message_goes_to_fix50() {
        let fix50 = Spy::serving(&[FIX50]);
        let fixt = Spy::serving(&[FIXT11]);
        let factory = DefaultMessageFactory::from_factories([
            fix50.clone() as Arc<dyn MessageFactory>,
            fixt.clone() as Arc<dyn MessageFactory>,
        ]);

        factory.create(FIXT11, "D");
        factory.create(FIXT11, "A");

        assert_eq!(fix50.calls(), vec!["create FIXT.1.1 D"]);
        assert_eq!(fixt.calls(), vec!["create FIXT.1.1 A"]);
    }

    #[test]
    fn test_fixt_application_message_with_builtin_dialects() {
        let factory = builtin();

        let order = factory.create(FIXT11, "D");
        assert_eq!(order.begin_string(), Some(FIXT11));
        assert_eq!(order.header.get_field(tags::APPL_VER_ID), Some("7"));

        let logon = factory.create(FIXT11, "A");
        assert!(!logon.header.is_set(tags::APPL_VER_ID));
    }

    #[test]
    fn test_every_admin_type_stays_on_fixt() {
        let fix50 = Spy::serving(&[FIX50]);
        let fixt = Spy::serving(&[FIXT11]);
        let factory = DefaultMessageFactory::from_factories([
            fix50.clone() as Arc<dyn MessageFactory>,
            fixt.clone() as Arc<dyn MessageFactory>,
        ]);

        for msg_type in ["0", "A", "1", "2", "3", "4", "5"] {
            factory.create(FIXT11, msg_type);
        }

        assert!(fix50.calls().is_empty());
        assert_eq!(fixt.calls().len(), 7);
    }

    #[test]
    fn test_fixt_group_always_goes_to_fix50() {
        let fix50 = Spy::serving(&[FIX50]);
        let fixt = Spy::serving(&[FIXT11]);
        let factory = DefaultMessageFactory::from_factories([
            fix50.clone() as Arc<dyn MessageFactory>,
            fixt.clone() as Arc<dyn MessageFactory>,
        ]);

        factory.create_group(FIXT11, "A", 384).unwrap();
        factory.create_group(FIXT11, "D", 453).unwrap();

        assert_eq!(
            fix50.calls(),
            vec!["group FIXT.1.1 A 384", "group FIXT.1.1 D 453"]
        );
        assert!(fixt.calls().is_empty());
    }

    #[test]
    fn test_fixt_group_without_fix50_is_unsupported() {
        let factory = DefaultMessageFactory::from_factories([
            Spy::serving(&[FIXT11]) as Arc<dyn MessageFactory>
        ]);
        let err = factory.create_group(FIXT11, "A", 384).unwrap_err();
        assert_eq!(
            err,
            FactoryError::unsupported_version(FIXT11, "FIXT.1.1")
        );
    }

    #[test]
    fn test_builtin_group_resolution() {
        let factory = builtin();

        let parties = factory.create_group(FIXT11, "D", 453).unwrap().unwrap();
        assert_eq!(parties.delimiter(), 448);

        assert!(factory.create_group(FIX42, "D", 453).unwrap().is_none());
    }

    #[test]
    fn test_unsupported_version_lists_sorted_unique_keys() {
        let factory = DefaultMessageFactory::from_factories([
            Spy::serving(&[FIX44, FIX42]) as Arc<dyn MessageFactory>,
            Spy::serving(&[FIX42]) as Arc<dyn MessageFactory>,
        ]);

        let err = factory.create_group("FIX.9.9", "D", 453).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported version: FIX.9.9. Supported begin strings: FIX.4.2, FIX.4.4"
        );
    }

    #[test]
    fn test_unsupported_version_on_empty_registry() {
        let factory = DefaultMessageFactory::from_factories(Vec::new());
        let err = factory.create_group(FIX44, "D", 453).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported version: FIX.4.4. Supported begin strings: None"
        );
    }

    #[test]
    fn test_last_registration_wins() {
        let first = Spy::serving(&["A"]);
        let second = Spy::serving(&["A", "B"]);
        let factory = DefaultMessageFactory::from_factories([
            first.clone() as Arc<dyn MessageFactory>,
            second.clone() as Arc<dyn MessageFactory>,
        ]);

        factory.create("A", "D");
        factory.create("B", "D");

        assert!(first.calls().is_empty());
        assert_eq!(second.calls(), vec!["create A D", "create B D"]);
    }

    #[test]
    fn test_module_scan_skips_non_default_constructible() {
        let module = ProviderModule::new(
            "acme",
            vec![
                ExportedType::factory::<dialects::Fix50Sp2MessageFactory>(),
                ExportedType::factory_with_args::<CustomGroupMessageFactory>(),
                ExportedType::factory::<DefaultMessageFactory>(),
                ExportedType::plain::<GroupSpec>(),
            ],
        );

        let factory = DefaultMessageFactory::from_modules(&[module]);
        assert_eq!(factory.supported_begin_strings(), vec![FIX50SP2]);
    }

    #[test]
    fn test_custom_dialect_alongside_builtin() {
        let custom = CustomGroupMessageFactory::new(
            ["ACME.1.0"],
            vec![GroupSpec::new("U1", 9000, 9001, &[9001, 9002])],
        );
        let mut providers = dialects::builtin_factories();
        providers.push(Arc::new(custom));
        let factory = DefaultMessageFactory::from_factories(providers);

        assert_eq!(factory.supported_begin_strings().len(), 10);
        let group = factory.create_group("ACME.1.0", "U1", 9000).unwrap().unwrap();
        assert_eq!(group.counter_tag(), 9000);
    }
}

#[cfg(test)]
mod discovery_tests {
    use std::fs;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use contracts::MessageFactory;
    use message_factory::{
        discover_in_dir, discover_plugins, AmbientModules, DefaultMessageFactory, DiscoveryError,
        DiscoveryGuard, ExportedType, PluginLoader, ProviderModule,
    };

    /// Loader handing out the FIX 4.4 dialect for any plugin file
    struct StubLoader;

    impl PluginLoader for StubLoader {
        fn load(&self, path: &Path) -> message_factory::Result<ProviderModule> {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            if name.to_ascii_lowercase().contains("broken") {
                return Err(DiscoveryError::load_failed(path, "bad image"));
            }
            Ok(ProviderModule::new(
                name,
                vec![ExportedType::factory::<dialects::Fix44MessageFactory>()],
            ))
        }
    }

    /// Loader refusing every file, so only link-time modules are seen
    struct RefusingLoader;

    impl PluginLoader for RefusingLoader {
        fn load(&self, path: &Path) -> message_factory::Result<ProviderModule> {
            Err(DiscoveryError::load_failed(path, "refused"))
        }
    }

    #[test]
    fn test_discovered_plugins_feed_the_registry() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["libfixcore_acme.so", "FixCore-Broken.dll", "other.so", "fixcore.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let report = discover_in_dir(dir.path(), &StubLoader);
        assert_eq!(report.modules.len(), 1);
        assert_eq!(report.failures.len(), 1);

        let factory = DefaultMessageFactory::from_modules(&report.modules);
        assert_eq!(factory.supported_begin_strings(), vec!["FIX.4.4"]);
    }

    #[test]
    fn test_concurrent_discovery_runs_once() {
        let guard = Arc::new(DiscoveryGuard::new());
        let runs = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let guard = Arc::clone(&guard);
                let runs = Arc::clone(&runs);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    guard.run_once(|| {
                        runs.fetch_add(1, Ordering::SeqCst);
                    })
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ran| *ran)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(guard.has_run());
    }

    /// Only test in this binary touching the process-wide discovery latch
    #[test]
    fn test_ambient_construction_discovers_once_and_sees_linked_dialects() {
        const THREADS: usize = 8;
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let ran = discover_plugins(&RefusingLoader);
                    let factory = DefaultMessageFactory::from_source(
                        &AmbientModules::with_loader(Box::new(RefusingLoader)),
                    );
                    (ran, factory.supported_begin_strings())
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let direct_runs = results.iter().filter(|(ran, _)| *ran).count();
        assert!(direct_runs <= 1, "discovery ran {direct_runs} times");
        assert!(!discover_plugins(&RefusingLoader));

        let dialect_strings = DefaultMessageFactory::from_factories(dialects::builtin_factories())
            .supported_begin_strings();
        for (_, begin_strings) in &results {
            for expected in &dialect_strings {
                assert!(
                    begin_strings.contains(expected),
                    "{expected} missing from {begin_strings:?}"
                );
            }
        }
    }
}

#[cfg(test)]
mod session_log_tests {
    use std::fs;
    use std::io::Write;

    use config_loader::SettingsLoader;
    use contracts::{LogError, LogFactory, SessionId};
    use session::{CompositeLogFactory, FileLogFactory, TracingLogFactory};

    #[test]
    fn test_settings_to_composite_log() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let config_path = dir.path().join("sessions.toml");
        let mut config = fs::File::create(&config_path).unwrap();
        write!(
            config,
            r#"
[default]
FileLogPath = "{}"

[[sessions]]
BeginString = "FIX.4.4"
SenderCompID = "BANZAI"
TargetCompID = "EXEC"
"#,
            log_dir.display()
        )
        .unwrap();

        let settings = SettingsLoader::load_from_path(&config_path).unwrap();
        let factory = CompositeLogFactory::new(vec![
            Box::new(FileLogFactory::new(settings)),
            Box::new(TracingLogFactory),
        ]);

        let session_id = SessionId::new("FIX.4.4", "BANZAI", "EXEC");
        let mut log = factory.create(&session_id).unwrap();
        log.on_outgoing("8=FIX.4.4|35=A").unwrap();
        log.on_incoming("8=FIX.4.4|35=A").unwrap();
        log.on_event("Logon complete").unwrap();
        log.dispose().unwrap();

        assert!(matches!(
            log.on_event("after"),
            Err(LogError::Disposed { .. })
        ));

        let messages =
            fs::read_to_string(log_dir.join("FIX.4.4-BANZAI-EXEC.messages.current.log")).unwrap();
        assert_eq!(messages.lines().count(), 2);
        let events =
            fs::read_to_string(log_dir.join("FIX.4.4-BANZAI-EXEC.event.current.log")).unwrap();
        assert_eq!(events.lines().count(), 1);
        assert!(!events.contains("after"));
    }
}

#[cfg(test)]
mod sender_tests {
    use std::sync::Mutex;

    use contracts::{Message, MessageFactory, MessageSender, SessionId};
    use message_factory::DefaultMessageFactory;
    use session::{DefaultMessageSender, SessionRouter};

    #[derive(Default)]
    struct Outbox {
        sent: Mutex<Vec<Message>>,
    }

    impl SessionRouter for Outbox {
        fn route(&self, message: Message, session_id: &SessionId) -> bool {
            if message.begin_string() != Some(session_id.begin_string.as_str()) {
                return false;
            }
            self.sent.lock().unwrap().push(message);
            true
        }
    }

    #[test]
    fn test_factory_message_routed_to_session() {
        let factory = DefaultMessageFactory::from_factories(dialects::builtin_factories());
        let sender = DefaultMessageSender::new(Outbox::default());
        let session_id = SessionId::new("FIX.4.2", "A", "B");

        assert!(sender.send_to_target(factory.create("FIX.4.2", "D"), &session_id));
        assert!(!sender.send_to_target(factory.create("FIX.4.4", "D"), &session_id));
        assert_eq!(sender.router().sent.lock().unwrap().len(), 1);
    }
}
