use std::collections::{BTreeMap, BTreeSet};

/// `use` declarations of one file, grouped std / external / crate.
#[derive(Debug, Default)]
pub(crate) struct Imports {
    std: BTreeMap<String, BTreeSet<String>>,
    external: BTreeMap<String, BTreeSet<String>>,
    local: BTreeMap<String, BTreeSet<String>>,
}

impl Imports {
    pub fn std(&mut self, module: &str, name: &str) -> &mut Self {
        insert(&mut self.std, module, name);
        self
    }

    pub fn external(&mut self, module: &str, name: &str) -> &mut Self {
        insert(&mut self.external, module, name);
        self
    }

    pub fn local(&mut self, module: &str, name: &str) -> &mut Self {
        insert(&mut self.local, module, name);
        self
    }

    pub fn render(&self) -> String {
        [&self.std, &self.external, &self.local]
            .into_iter()
            .filter(|group| !group.is_empty())
            .map(|group| {
                group
                    .iter()
                    .map(|(module, names)| {
                        if names.len() == 1 {
                            let name = names.iter().next().map(String::as_str).unwrap_or_default();
                            format!("use {module}::{name};\n")
                        } else {
                            let names: Vec<&str> = names.iter().map(String::as_str).collect();
                            format!("use {module}::{{{}}};\n", names.join(", "))
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn insert(group: &mut BTreeMap<String, BTreeSet<String>>, module: &str, name: &str) {
    group
        .entry(module.to_string())
        .or_default()
        .insert(name.to_string());
}
