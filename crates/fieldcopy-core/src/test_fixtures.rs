//! Beans shared by the core test suites.

use fieldcopy_derive::Bean;
use std::sync::Arc;

///
/// SubItem
///

#[derive(Debug, Default, Bean)]
#[bean(accessors)]
pub(crate) struct SubItem {
    name: Option<String>,
}

impl SubItem {
    pub(crate) fn named(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: Some(name.to_string()),
        })
    }

    pub(crate) fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // fluent setter
    pub(crate) fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.name = name;
        self
    }
}

///
/// ItemA
///

#[derive(Debug, Default, Bean)]
#[bean(accessors)]
pub(crate) struct ItemA {
    pub(crate) code: Option<String>,
    pub(crate) sex: bool,
    pub(crate) sub_item: Option<Arc<SubItem>>,
    pub(crate) sub_items: Option<Vec<Arc<SubItem>>>,
}

impl ItemA {
    pub(crate) fn sample() -> Self {
        let a = SubItem::named("a");

        Self {
            code: Some("itemA".to_string()),
            sex: true,
            sub_item: Some(Arc::clone(&a)),
            sub_items: Some(vec![a]),
        }
    }

    pub(crate) fn get_code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub(crate) fn set_code(&mut self, code: Option<String>) {
        self.code = code;
    }

    pub(crate) const fn is_sex(&self) -> bool {
        self.sex
    }

    pub(crate) const fn set_sex(&mut self, sex: bool) {
        self.sex = sex;
    }

    pub(crate) fn get_sub_item(&self) -> Option<Arc<SubItem>> {
        self.sub_item.clone()
    }

    pub(crate) fn set_sub_item(&mut self, sub_item: Option<Arc<SubItem>>) {
        self.sub_item = sub_item;
    }

    pub(crate) const fn get_sub_items(&self) -> Option<&Vec<Arc<SubItem>>> {
        self.sub_items.as_ref()
    }

    pub(crate) fn set_sub_items(&mut self, sub_items: Option<Vec<Arc<SubItem>>>) {
        self.sub_items = sub_items;
    }
}

///
/// ItemB
///

#[derive(Debug, Default, Bean)]
#[bean(accessors)]
pub(crate) struct ItemB {
    pub(crate) number: Option<String>,
    pub(crate) score: i32,
    pub(crate) item: Option<Arc<SubItem>>,
    pub(crate) items: Option<Vec<Arc<SubItem>>>,
}

impl ItemB {
    pub(crate) fn get_number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub(crate) fn set_number(&mut self, number: Option<String>) {
        self.number = number;
    }

    pub(crate) const fn get_score(&self) -> i32 {
        self.score
    }

    pub(crate) const fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    pub(crate) fn get_item(&self) -> Option<Arc<SubItem>> {
        self.item.clone()
    }

    pub(crate) fn set_item(&mut self, item: Option<Arc<SubItem>>) {
        self.item = item;
    }

    pub(crate) const fn get_items(&self) -> Option<&Vec<Arc<SubItem>>> {
        self.items.as_ref()
    }

    pub(crate) fn set_items(&mut self, items: Option<Vec<Arc<SubItem>>>) {
        self.items = items;
    }
}

///
/// Plain
/// no accessors registered
///

#[derive(Debug, Default, Bean)]
pub(crate) struct Plain {
    pub(crate) code: Option<String>,
    pub(crate) count: u32,
}

///
/// Base / Child
/// emulated inheritance with a shadowed `name`
///

#[derive(Debug, Default, Bean)]
pub(crate) struct Base {
    pub(crate) name: Option<String>,

    #[bean(readonly)]
    pub(crate) id: u64,
}

#[derive(Debug, Default, Bean)]
pub(crate) struct Child {
    #[bean(parent)]
    pub(crate) base: Base,

    pub(crate) name: Option<String>,
    pub(crate) age: u8,

    #[bean(skip)]
    pub(crate) scratch: Vec<u8>,
}

///
/// TrackedItemA
/// generated wrapper around ItemA
///

#[derive(Debug, Default, Bean)]
#[bean(proxy)]
pub(crate) struct TrackedItemA {
    #[bean(parent)]
    pub(crate) inner: ItemA,

    pub(crate) hits: u32,
}

///
/// Account
/// bool accessor naming
///

#[derive(Debug, Default, Bean)]
#[bean(accessors)]
pub(crate) struct Account {
    pub(crate) is_active: bool,
    pub(crate) enabled: bool,
    pub(crate) verified: Option<bool>,
}

impl Account {
    pub(crate) const fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) const fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub(crate) const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) const fn get_verified(&self) -> Option<bool> {
        self.verified
    }

    pub(crate) const fn set_verified(&mut self, verified: Option<bool>) {
        self.verified = verified;
    }
}

///
/// Guarded
/// setter that can refuse a value
///

#[derive(Debug, Default, Bean)]
#[bean(accessors)]
pub(crate) struct Guarded {
    pub(crate) age: u8,
    pub(crate) label: Option<String>,
}

impl Guarded {
    pub(crate) const fn get_age(&self) -> u8 {
        self.age
    }

    pub(crate) fn set_age(&mut self, age: u8) -> Result<(), String> {
        if age > 150 {
            return Err(format!("age {age} is out of range"));
        }
        self.age = age;

        Ok(())
    }

    pub(crate) fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }
}

///
/// Person
/// source for `Guarded`
///

#[derive(Debug, Default, Bean)]
pub(crate) struct Person {
    pub(crate) age: u8,
    pub(crate) label: Option<String>,
}

///
/// Ledger
/// carries both ends of a `code -> number` mapping
///

#[derive(Debug, Default, Bean)]
pub(crate) struct Ledger {
    pub(crate) code: Option<String>,
    pub(crate) number: Option<String>,
    pub(crate) entries: usize,
}
