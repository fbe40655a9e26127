use indexmap::IndexMap;

/// Screen memory map base address.
pub const SCREEN: u16 = 16384;
/// Keyboard memory map address.
pub const KBD: u16 = 24576;

/// Symbol name -> address, pre-seeded with the predefined symbols.
///
/// Iteration order is insertion order, so the table doubles as a record of
/// the order in which variables were first encountered.
pub struct SymbolTable(IndexMap<String, u16>);

impl SymbolTable {
    pub fn new() -> Self {
        let mut tbl = IndexMap::new();
        tbl.insert("SP".to_string(), 0);
        tbl.insert("LCL".to_string(), 1);
        tbl.insert("ARG".to_string(), 2);
        tbl.insert("THIS".to_string(), 3);
        tbl.insert("THAT".to_string(), 4);
        for i in 0..=15 {
            tbl.insert(format!("R{}", i), i);
        }
        tbl.insert("SCREEN".to_string(), SCREEN);
        tbl.insert("KBD".to_string(), KBD);
        SymbolTable(tbl)
    }

    /// First-writer-wins: re-binding an existing symbol is a silent no-op.
    /// Variable allocation order depends on this.
    pub fn add_entry(&mut self, symbol: &str, address: u16) {
        self.0.entry(symbol.to_string()).or_insert(address);
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    /// `None` for an unbound symbol; the caller surfaces it as an
    /// undefined-symbol failure, never as a sentinel address.
    pub fn get_address(&self, symbol: &str) -> Option<u16> {
        self.0.get(symbol).copied()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
