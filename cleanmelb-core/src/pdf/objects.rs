use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    number: u32,
    generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    String(String),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Dictionary, Vec<u8>),
    Reference(ObjectId),
}

impl Object {
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    /// A stream object whose `/Length` matches `data`.
    pub fn stream(mut dict: Dictionary, data: Vec<u8>) -> Self {
        dict.set("Length", Object::Integer(data.len() as i64));
        Object::Stream(dict, data)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

impl From<Dictionary> for Object {
    fn from(dict: Dictionary) -> Self {
        Object::Dictionary(dict)
    }
}

/// Dictionary that keeps keys in insertion order so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Object)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

/// Zlib-compresses stream data for a `/FlateDecode` filter.
#[cfg(feature = "compression")]
pub(crate) fn compress_flate(data: &[u8]) -> Result<Vec<u8>> {
    use crate::error::PosterError;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| PosterError::CompressionError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| PosterError::CompressionError(e.to_string()))
}

/// Builds a content or image stream, compressing it when the feature is on.
pub(crate) fn encoded_stream(dict: Dictionary, data: Vec<u8>) -> Result<Object> {
    #[cfg(feature = "compression")]
    {
        let mut dict = dict;
        let compressed = compress_flate(&data)?;
        dict.set("Filter", Object::name("FlateDecode"));
        Ok(Object::stream(dict, compressed))
    }

    #[cfg(not(feature = "compression"))]
    {
        Ok(Object::stream(dict, data))
    }
}
