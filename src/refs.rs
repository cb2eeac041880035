use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    PageTree,
    Page,
    Font,
    Content,
}

/// Object ids of a single-page document, allocated on first use
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    fn new_id(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// The id of `ref_type`, allocating one the first time it is asked for
    pub fn get(&mut self, ref_type: RefType) -> Ref {
        if let Some(id) = self.refs.get(&ref_type) {
            return *id;
        }
        let id = self.new_id();
        self.refs.insert(ref_type, id);
        id
    }
}
