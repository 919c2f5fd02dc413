use indexmap::IndexMap;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";

/// String keyed, string valued header mapping that iterates in insertion order.
///
/// Keys are stored exactly as given. Setting a key that already exists keeps
/// its original position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        HttpHeaders {
            headers: IndexMap::new(),
        }
    }

    pub fn set<K: ToString, V: ToString>(&mut self, key: K, value: V) {
        self.headers.insert(key.to_string(), value.to_string());
    }

    pub fn get<T: AsRef<str>>(&self, key: T) -> Option<&str> {
        self.headers.get(key.as_ref()).map(String::as_str)
    }

    pub fn contains<T: AsRef<str>>(&self, key: T) -> bool {
        self.headers.contains_key(key.as_ref())
    }

    pub fn remove<T: AsRef<str>>(&mut self, key: T) -> Option<String> {
        self.headers.shift_remove(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for HttpHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HttpHeaders::new();
        for (key, value) in iter {
            headers.set(key, value);
        }
        headers
    }
}

impl IntoIterator for HttpHeaders {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

#[cfg(test)]
mod test {
    use crate::http::http_header::HttpHeaders;

    #[test]
    fn headers_keep_insertion_order() {
        let mut headers: HttpHeaders = [("B", "2"), ("A", "1")].into_iter().collect();
        headers.set("C", 3);
        headers.set("B", 20);

        let keys: Vec<&str> = headers.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
        assert_eq!(headers.get("B"), Some("20"));
    }

    #[test]
    fn headers_remove_keeps_order() {
        let mut headers: HttpHeaders = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();
        assert_eq!(headers.remove("B"), Some(String::from("2")));
        assert!(!headers.contains("B"));

        let keys: Vec<&str> = headers.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["A", "C"]);
        assert_eq!(headers.len(), 2);
    }
}
