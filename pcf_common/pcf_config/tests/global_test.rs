use pcf_config::{get_config, get_config_with_default, Config, DEFAULT_CONFIG_FILE};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

const TEST_CONFIG: &str = r#"
test:
  data: "测试数据"
  user:
    name: "张三"
    age: 18
"#;

/// Runs each test inside its own working directory with a fresh default store
///
/// Restores the previous working directory and clears the store on drop
struct Workspace {
    dir: TempDir,
    original_cwd: PathBuf,
}

impl Workspace {
    fn new(content: Option<&str>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Config::reset();
        let dir = TempDir::new().expect("Failed to create temp dir");
        if let Some(content) = content {
            fs::write(dir.path().join(DEFAULT_CONFIG_FILE), content).expect("Failed to write config");
        }
        let original_cwd = env::current_dir().expect("Failed to get current dir");
        env::set_current_dir(dir.path()).expect("Failed to change dir");
        Workspace { dir, original_cwd }
    }

    fn write(&self, content: &str) {
        fs::write(self.dir.path().join(DEFAULT_CONFIG_FILE), content).expect("Failed to write config");
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
        Config::reset();
    }
}

#[test]
#[serial]
fn test_instance_is_shared() {
    let _ws = Workspace::new(Some(TEST_CONFIG));
    let first = Config::instance().unwrap();
    let second = Config::instance().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
#[serial]
fn test_reset_creates_new_instance() {
    let _ws = Workspace::new(Some(TEST_CONFIG));
    let first = Config::instance().unwrap();
    Config::reset();
    let second = Config::instance().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
#[serial]
fn test_convenience_functions() {
    let _ws = Workspace::new(Some(TEST_CONFIG));
    assert_eq!(get_config("test.data").unwrap().as_str(), Some("测试数据"));
    assert_eq!(get_config_with_default("test.user.name", "default").unwrap().as_str(), Some("张三"));
    assert_eq!(get_config_with_default("nonexistent.key", "default").unwrap().as_str(), Some("default"));
    assert!(get_config("nonexistent.key").unwrap_err().is_key_not_found());
}

#[test]
#[serial]
fn test_reload_through_instance_visible_to_all_handles() {
    let ws = Workspace::new(Some(TEST_CONFIG));
    let handle = Config::instance().unwrap();

    ws.write(&TEST_CONFIG.replace("测试数据", "修改后的数据"));
    Config::instance().unwrap().reload().unwrap();

    assert_eq!(handle.get("test.data").unwrap().as_str(), Some("修改后的数据"));
    assert_eq!(get_config("test.data").unwrap().as_str(), Some("修改后的数据"));
}

#[test]
#[serial]
fn test_missing_config_file() {
    let _ws = Workspace::new(None);
    assert!(Config::instance().unwrap_err().is_not_found_file());
    assert!(get_config("test.data").unwrap_err().is_not_found_file());
}

#[test]
#[serial]
fn test_invalid_yaml() {
    let _ws = Workspace::new(Some("invalid: yaml: content: ["));
    assert!(Config::instance().unwrap_err().is_parse_error());
}

#[test]
#[serial]
fn test_failed_load_is_retried() {
    let ws = Workspace::new(None);
    assert!(Config::instance().is_err());

    ws.write(TEST_CONFIG);
    let store = Config::instance().expect("Load should be retried after a failure");
    assert_eq!(store.get("test.user.age").unwrap().as_i64(), Some(18));
}
