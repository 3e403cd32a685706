use crate::error::Result;
use crate::prompt::Prompter;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create an empty file, along with any missing parent directories.
pub(crate) fn touch(path: &Path) {
    write_file(path, "");
}

pub(crate) fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

pub(crate) const WEATHER_AGENT: &str = "from agents import Agent\n\nweather_agent = Agent(name=\"Weather agent\")\n";
pub(crate) const GET_WEATHER: &str = "def get_weather(city: str) -> str:\n    return city\n";

/// A template bundle with two public agents, one private agent and one tool.
pub(crate) fn create_template_bundle() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let agents = temp_dir.path().join("agents");
    let tools = temp_dir.path().join("tools");

    write_file(&agents.join("weather_agent.py"), WEATHER_AGENT);
    write_file(&agents.join("research_agent.py"), "research_agent = None\n");
    write_file(&agents.join("_base.py"), "# shared helpers\n");
    write_file(&tools.join("get_weather.py"), GET_WEATHER);

    temp_dir
}

/// Replays canned answers and records every question asked.
#[derive(Default)]
pub(crate) struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    selections: VecDeque<Option<String>>,
    pub(crate) asked: Vec<String>,
}

impl ScriptedPrompter {
    pub(crate) fn confirming(answers: &[bool]) -> Self {
        Self {
            confirms: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub(crate) fn selecting(answers: &[Option<&str>]) -> Self {
        Self {
            selections: answers.iter().map(|a| a.map(str::to_string)).collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        self.asked.push(message.to_string());
        Ok(self
            .confirms
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirm: {message}")))
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
        self.asked.push(message.to_string());
        let answer = self
            .selections
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected select: {message}"));
        if let Some(answer) = &answer {
            assert!(choices.contains(answer), "{answer} not offered in {choices:?}");
        }
        Ok(answer)
    }
}
