use eventq::{ConfigManager, Defaults, Emitter, HandlerRegistry, QueueError};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_loaded_from_yaml_drive_dispatch() {
        let config_yaml = r#"
name: greeter
defaults:
  greet: say_hello
  leave: say_bye
"#;
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("greeter.yaml");
        fs::write(&config_path, config_yaml).unwrap();

        let said = Rc::new(RefCell::new(Vec::new()));
        let mut registry: HandlerRegistry<Emitter<String>, String> = HandlerRegistry::new();
        let said_clone = said.clone();
        registry.register("say_hello", move |_, event| {
            said_clone
                .borrow_mut()
                .push(format!("hello {}", event.data().cloned().unwrap_or_default()));
            Ok(())
        });
        let said_clone = said.clone();
        registry.register("say_bye", move |_, _| {
            said_clone.borrow_mut().push("bye".to_string());
            Ok(())
        });

        let config = ConfigManager::load_config(&config_path).unwrap();
        let emitter = Emitter::new(Defaults::from_config(&config, &registry).unwrap());

        emitter
            .trigger("greet", Some("Ann".to_string()))
            .unwrap()
            .trigger("leave", None)
            .unwrap();

        assert_eq!(*said.borrow(), vec!["hello Ann".to_string(), "bye".to_string()]);
    }

    #[test]
    fn test_config_with_unknown_handler_fails_before_any_queue_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("greeter.json");
        fs::write(&config_path, r#"{ "defaults": { "greet": "nobody" } }"#).unwrap();

        let registry: HandlerRegistry<Emitter> = HandlerRegistry::new();
        let config = ConfigManager::load_config(&config_path).unwrap();

        match Defaults::from_config(&config, &registry) {
            Err(QueueError::Config(msg)) => assert!(msg.contains("nobody")),
            Err(e) => panic!("Expected a Config error, got {:?}", e),
            Ok(_) => panic!("Expected an error, got Ok"),
        }
    }
}
