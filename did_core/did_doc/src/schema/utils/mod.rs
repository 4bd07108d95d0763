use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum OneOrList<T> {
    One(T),
    List(Vec<T>),
}

impl<T> OneOrList<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrList::One(item) => std::slice::from_ref(item),
            OneOrList::List(items) => items.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }
}

impl<T> Default for OneOrList<T> {
    fn default() -> Self {
        OneOrList::List(Vec::new())
    }
}

impl<T> From<Vec<T>> for OneOrList<T> {
    fn from(mut value: Vec<T>) -> Self {
        match value.len() {
            1 => OneOrList::One(value.remove(0)),
            _ => OneOrList::List(value),
        }
    }
}

impl<T: Display + Debug> Display for OneOrList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OneOrList::One(t) => write!(f, "{}", t),
            OneOrList::List(t) => write!(f, "{:?}", t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_or_list_deserializes_both_shapes() {
        let one: OneOrList<String> = serde_json::from_str("\"LinkedDomains\"").unwrap();
        let list: OneOrList<String> = serde_json::from_str("[\"a\", \"b\"]").unwrap();

        assert_eq!(one.as_slice(), &["LinkedDomains".to_string()]);
        assert_eq!(list.as_slice().len(), 2);
        assert_eq!(list.first(), Some(&"a".to_string()));
    }

    #[test]
    fn test_one_or_list_from_vec() {
        assert_eq!(OneOrList::from(vec![1]), OneOrList::One(1));
        assert_eq!(OneOrList::from(vec![1, 2]), OneOrList::List(vec![1, 2]));
        assert!(OneOrList::<u8>::from(vec![]).is_empty());
    }
}
