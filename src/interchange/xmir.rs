//! XMIR reader: builds an [`ObjectTree`] from an XML program document.
//!
//! The expected shape:
//!
//! ```xml
//! <program name="app">
//!   <metas>
//!     <meta><head>package</head><tail>org.example</tail></meta>
//!   </metas>
//!   <objects>
//!     <o abstract="" name="A">
//!       <o base="int" name="x"/>
//!     </o>
//!   </objects>
//! </program>
//! ```
//!
//! Every `<o>` under `<objects>` becomes an object definition in document
//! order. An `abstract` attribute marks the object abstract whatever its
//! value. The package comes from a `package` meta, which must precede
//! `<objects>`.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smol_str::SmolStr;

use super::error::InterchangeError;
use crate::base::ObjectId;
use crate::base::constants::ROOT_PACKAGE;
use crate::tree::{BaseRef, NewObject, ObjectTree};

const PACKAGE_META: &str = "package";

/// Read an XMIR document from memory.
pub fn read_xmir(input: &[u8]) -> Result<ObjectTree, InterchangeError> {
    XmirReader::default().read(input)
}

/// Read an XMIR document from disk.
pub fn read_xmir_file(path: &Path) -> Result<ObjectTree, InterchangeError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!("Loading XMIR from {}", path.display());
    read_xmir(&bytes)
}

/// Open element, tracked to match start and end tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Objects,
    Object(ObjectId),
    Meta,
    Head,
    Tail,
    Other,
}

#[derive(Debug, Default)]
struct XmirReader {
    tree: ObjectTree,
    stack: Vec<Open>,
    package: Option<String>,
    head: String,
    tail: String,
    saw_objects: bool,
}

impl XmirReader {
    fn read(mut self, input: &[u8]) -> Result<ObjectTree, InterchangeError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => self.handle_start(e)?,
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    self.handle_start(e)?;
                    self.handle_end();
                }
                Ok(Event::End(_)) => self.handle_end(),
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| InterchangeError::xml(format!("Text error: {e}")))?;
                    self.handle_text(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(InterchangeError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if !self.saw_objects {
            return Err(InterchangeError::missing_element("objects"));
        }
        tracing::debug!(
            "Read {} objects in package '{}'",
            self.tree.len(),
            self.package.as_deref().unwrap_or(ROOT_PACKAGE)
        );
        Ok(self.tree)
    }

    fn inside_objects(&self) -> bool {
        self.stack.contains(&Open::Objects)
    }

    fn enclosing_object(&self) -> Option<ObjectId> {
        self.stack.iter().rev().find_map(|open| match open {
            Open::Object(id) => Some(*id),
            _ => None,
        })
    }

    fn handle_start(&mut self, e: &BytesStart<'_>) -> Result<(), InterchangeError> {
        let open = match e.name().as_ref() {
            b"objects" => {
                self.saw_objects = true;
                Open::Objects
            }
            b"o" if self.inside_objects() => Open::Object(self.add_object(e)?),
            b"meta" => {
                self.head.clear();
                self.tail.clear();
                Open::Meta
            }
            b"head" if self.stack.last() == Some(&Open::Meta) => Open::Head,
            b"tail" if self.stack.last() == Some(&Open::Meta) => Open::Tail,
            _ => Open::Other,
        };
        self.stack.push(open);
        Ok(())
    }

    fn handle_end(&mut self) {
        if self.stack.pop() == Some(Open::Meta) && self.head.trim() == PACKAGE_META {
            self.package = Some(self.tail.trim().to_string());
        }
    }

    fn handle_text(&mut self, text: &str) {
        match self.stack.last() {
            Some(Open::Head) => self.head.push_str(text),
            Some(Open::Tail) => self.tail.push_str(text),
            _ => {}
        }
    }

    fn add_object(&mut self, e: &BytesStart<'_>) -> Result<ObjectId, InterchangeError> {
        let mut object = NewObject::anonymous();
        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
            let value = attr
                .unescape_value()
                .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))?;
            match attr.key.as_ref() {
                b"name" => object.name = Some(SmolStr::new(value.as_ref())),
                b"base" => object.base = BaseRef::parse(&value),
                b"abstract" => object.is_abstract = true,
                _ => {}
            }
        }
        let id = match self.enclosing_object() {
            Some(parent) => self.tree.add_child(parent, object)?,
            None => {
                let package = self.package.as_deref().unwrap_or(ROOT_PACKAGE);
                self.tree.add_root(package, object)
            }
        };
        Ok(id)
    }
}
