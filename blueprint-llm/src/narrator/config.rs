use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NarratorConfig {
    pub templates: Templates,
    pub limits: Limits,
    pub io: IoLists,
}

/// Sentence fragments; `{name}`, `{params}`, `{count}`, `{subject}`,
/// `{owners}` and `{list}` are substituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub function: String,
    pub class: String,
    pub class_with_methods: String,
    pub definitions: String,
    pub script: String,
    pub imports: String,
    pub network_call: String,
    pub db_call: String,
    pub fs_io: String,
    pub subprocess_call: String,
    pub owners: String,
    pub entrypoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub definitions_max: usize,
    pub imports_max: usize,
    pub max_sentences: usize,
}

/// Callees that mark I/O. Entries starting with `.` match any receiver,
/// e.g. `.execute` matches `cursor.execute`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IoLists {
    pub network_callees: Vec<String>,
    pub db_callees: Vec<String>,
    pub fs_callees: Vec<String>,
    pub subprocess_callees: Vec<String>,
}

impl IoLists {
    pub fn matches(list: &[String], callee: &str) -> bool {
        list.iter().any(|entry| {
            if entry.starts_with('.') {
                callee.ends_with(entry.as_str())
            } else {
                callee == entry
            }
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            function: "function {name}({params})".to_string(),
            class: "class {name}".to_string(),
            class_with_methods: "class {name} with {count} method(s)".to_string(),
            definitions: "Defines {list}".to_string(),
            script: "A top-level script of {count} statement(s)".to_string(),
            imports: "Imports {list}".to_string(),
            network_call: "makes network calls via {subject}{owners}".to_string(),
            db_call: "talks to a database via {subject}{owners}".to_string(),
            fs_io: "performs file I/O via {subject}{owners}".to_string(),
            subprocess_call: "runs external commands via {subject}{owners}".to_string(),
            owners: " in {list}".to_string(),
            entrypoint: "Runs as a script when executed directly".to_string(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            definitions_max: 4,
            imports_max: 5,
            max_sentences: 3,
        }
    }
}

impl Default for IoLists {
    fn default() -> Self {
        Self {
            network_callees: strings(&[
                "requests.get",
                "requests.post",
                "requests.put",
                "requests.delete",
                "requests.request",
                "httpx.get",
                "httpx.post",
                "urlopen",
                "urllib.request.urlopen",
                "socket.socket",
                ".getresponse",
            ]),
            db_callees: strings(&[
                "sqlite3.connect",
                "psycopg2.connect",
                "pymysql.connect",
                "mysql.connector.connect",
                "create_engine",
                ".execute",
                ".executemany",
                ".commit",
            ]),
            fs_callees: strings(&[
                "open",
                "os.remove",
                "os.makedirs",
                "os.listdir",
                "shutil.copy",
                "shutil.move",
                "shutil.rmtree",
                ".read_text",
                ".write_text",
            ]),
            subprocess_callees: strings(&[
                "subprocess.run",
                "subprocess.call",
                "subprocess.check_output",
                "subprocess.Popen",
                "os.system",
                "os.popen",
            ]),
        }
    }
}
