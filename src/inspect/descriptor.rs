// src/inspect/descriptor.rs
//! Reads the module name out of a binary `module-info.class` descriptor.
//!
//! This is a minimal JVM class-file reader: it keeps only the constant-pool
//! entries needed to resolve the `Module` attribute's name reference and
//! skips everything else.

use crate::error::{Result, ScoutError};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

const CLASS_MAGIC: u32 = 0xCAFE_BABE;

// Constant pool tags (JVMS §4.4).
const CONSTANT_UTF8: u8 = 1;
const CONSTANT_INTEGER: u8 = 3;
const CONSTANT_FLOAT: u8 = 4;
const CONSTANT_LONG: u8 = 5;
const CONSTANT_DOUBLE: u8 = 6;
const CONSTANT_CLASS: u8 = 7;
const CONSTANT_STRING: u8 = 8;
const CONSTANT_FIELDREF: u8 = 9;
const CONSTANT_METHODREF: u8 = 10;
const CONSTANT_INTERFACE_METHODREF: u8 = 11;
const CONSTANT_NAME_AND_TYPE: u8 = 12;
const CONSTANT_METHOD_HANDLE: u8 = 15;
const CONSTANT_METHOD_TYPE: u8 = 16;
const CONSTANT_DYNAMIC: u8 = 17;
const CONSTANT_INVOKE_DYNAMIC: u8 = 18;
const CONSTANT_MODULE: u8 = 19;
const CONSTANT_PACKAGE: u8 = 20;

#[derive(Debug, Clone)]
enum PoolEntry {
    Utf8(String),
    Module(u16),
    Other,
}

/// Parses a class file and returns the name declared by its `Module`
/// attribute.
///
/// # Errors
///
/// Returns [`ScoutError::Descriptor`] for anything that is not a class file
/// carrying a `Module` attribute, and I/O errors from the underlying reader.
pub fn module_name<R: Read>(mut reader: R) -> Result<String> {
    let magic = reader.read_u32::<BigEndian>()?;
    if magic != CLASS_MAGIC {
        return Err(ScoutError::Descriptor(format!(
            "bad class file magic 0x{magic:08x}"
        )));
    }

    // minor, major
    reader.read_u16::<BigEndian>()?;
    reader.read_u16::<BigEndian>()?;

    let pool = read_constant_pool(&mut reader)?;

    // access_flags, this_class, super_class
    reader.read_u16::<BigEndian>()?;
    reader.read_u16::<BigEndian>()?;
    reader.read_u16::<BigEndian>()?;

    let interface_count = reader.read_u16::<BigEndian>()?;
    skip(&mut reader, u64::from(interface_count) * 2)?;

    skip_members(&mut reader)?; // fields
    skip_members(&mut reader)?; // methods

    let attribute_count = reader.read_u16::<BigEndian>()?;
    for _ in 0..attribute_count {
        let name_index = reader.read_u16::<BigEndian>()?;
        let length = reader.read_u32::<BigEndian>()?;
        if utf8_at(&pool, name_index) == Some("Module") {
            let module_index = reader.read_u16::<BigEndian>()?;
            return resolve_module_name(&pool, module_index);
        }
        skip(&mut reader, u64::from(length))?;
    }

    Err(ScoutError::Descriptor(
        "class file has no Module attribute".to_string(),
    ))
}

fn read_constant_pool<R: Read>(reader: &mut R) -> Result<Vec<PoolEntry>> {
    let count = reader.read_u16::<BigEndian>()?;
    let mut pool = vec![PoolEntry::Other; usize::from(count)];

    let mut index = 1;
    while index < count {
        let tag = reader.read_u8()?;
        let mut slots = 1;
        let entry = match tag {
            CONSTANT_UTF8 => {
                let length = reader.read_u16::<BigEndian>()?;
                let mut bytes = vec![0_u8; usize::from(length)];
                reader.read_exact(&mut bytes)?;
                // Module names are plain ASCII in practice; tolerate the
                // modified-UTF-8 corner cases lossily.
                PoolEntry::Utf8(String::from_utf8_lossy(&bytes).into_owned())
            }
            CONSTANT_MODULE => PoolEntry::Module(reader.read_u16::<BigEndian>()?),
            CONSTANT_CLASS | CONSTANT_STRING | CONSTANT_METHOD_TYPE | CONSTANT_PACKAGE => {
                skip(reader, 2)?;
                PoolEntry::Other
            }
            CONSTANT_METHOD_HANDLE => {
                skip(reader, 3)?;
                PoolEntry::Other
            }
            CONSTANT_INTEGER
            | CONSTANT_FLOAT
            | CONSTANT_FIELDREF
            | CONSTANT_METHODREF
            | CONSTANT_INTERFACE_METHODREF
            | CONSTANT_NAME_AND_TYPE
            | CONSTANT_DYNAMIC
            | CONSTANT_INVOKE_DYNAMIC => {
                skip(reader, 4)?;
                PoolEntry::Other
            }
            CONSTANT_LONG | CONSTANT_DOUBLE => {
                skip(reader, 8)?;
                slots = 2; // long and double occupy two pool slots
                PoolEntry::Other
            }
            other => {
                return Err(ScoutError::Descriptor(format!(
                    "unknown constant pool tag {other}"
                )));
            }
        };
        pool[usize::from(index)] = entry;
        index += slots;
    }
    Ok(pool)
}

fn skip_members<R: Read>(reader: &mut R) -> Result<()> {
    let count = reader.read_u16::<BigEndian>()?;
    for _ in 0..count {
        // access_flags, name_index, descriptor_index
        skip(reader, 6)?;
        let attribute_count = reader.read_u16::<BigEndian>()?;
        for _ in 0..attribute_count {
            skip(reader, 2)?;
            let length = reader.read_u32::<BigEndian>()?;
            skip(reader, u64::from(length))?;
        }
    }
    Ok(())
}

fn skip<R: Read>(reader: &mut R, count: u64) -> Result<()> {
    let copied = std::io::copy(&mut reader.take(count), &mut std::io::sink())?;
    if copied != count {
        return Err(ScoutError::Descriptor(
            "truncated class file".to_string(),
        ));
    }
    Ok(())
}

fn utf8_at(pool: &[PoolEntry], index: u16) -> Option<&str> {
    match pool.get(usize::from(index)) {
        Some(PoolEntry::Utf8(s)) => Some(s),
        _ => None,
    }
}

fn resolve_module_name(pool: &[PoolEntry], module_index: u16) -> Result<String> {
    let Some(PoolEntry::Module(name_index)) = pool.get(usize::from(module_index)) else {
        return Err(ScoutError::Descriptor(
            "Module attribute does not reference a module constant".to_string(),
        ));
    };
    match utf8_at(pool, *name_index) {
        Some(name) => Ok(name.to_string()),
        None => Err(ScoutError::Descriptor(
            "module constant does not reference a name".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, WriteBytesExt};

    // Builds the smallest valid module-info.class declaring `name`.
    fn synthetic_descriptor(name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        out.write_u32::<BigEndian>(CLASS_MAGIC).unwrap();
        out.write_u16::<BigEndian>(0).unwrap(); // minor
        out.write_u16::<BigEndian>(53).unwrap(); // major (Java 9)

        out.write_u16::<BigEndian>(6).unwrap(); // pool count
        // 1: Utf8 "module-info"
        out.write_u8(CONSTANT_UTF8).unwrap();
        out.write_u16::<BigEndian>(11).unwrap();
        out.extend_from_slice(b"module-info");
        // 2: Class #1
        out.write_u8(CONSTANT_CLASS).unwrap();
        out.write_u16::<BigEndian>(1).unwrap();
        // 3: Utf8 "Module"
        out.write_u8(CONSTANT_UTF8).unwrap();
        out.write_u16::<BigEndian>(6).unwrap();
        out.extend_from_slice(b"Module");
        // 4: Utf8 module name
        out.write_u8(CONSTANT_UTF8).unwrap();
        out.write_u16::<BigEndian>(u16::try_from(name.len()).unwrap())
            .unwrap();
        out.extend_from_slice(name.as_bytes());
        // 5: Module #4
        out.write_u8(CONSTANT_MODULE).unwrap();
        out.write_u16::<BigEndian>(4).unwrap();

        out.write_u16::<BigEndian>(0x8000).unwrap(); // ACC_MODULE
        out.write_u16::<BigEndian>(2).unwrap(); // this_class
        out.write_u16::<BigEndian>(0).unwrap(); // super_class
        out.write_u16::<BigEndian>(0).unwrap(); // interfaces
        out.write_u16::<BigEndian>(0).unwrap(); // fields
        out.write_u16::<BigEndian>(0).unwrap(); // methods

        out.write_u16::<BigEndian>(1).unwrap(); // attributes
        out.write_u16::<BigEndian>(3).unwrap(); // "Module"
        out.write_u32::<BigEndian>(16).unwrap(); // attribute length
        out.write_u16::<BigEndian>(5).unwrap(); // module_name_index
        out.write_u16::<BigEndian>(0).unwrap(); // module_flags
        out.write_u16::<BigEndian>(0).unwrap(); // module_version_index
        out.write_u16::<BigEndian>(0).unwrap(); // requires_count
        out.write_u16::<BigEndian>(0).unwrap(); // exports_count
        out.write_u16::<BigEndian>(0).unwrap(); // opens_count
        out.write_u16::<BigEndian>(0).unwrap(); // uses_count
        out.write_u16::<BigEndian>(0).unwrap(); // provides_count
        out
    }

    #[test]
    fn test_reads_module_name() {
        let bytes = synthetic_descriptor("example.module");
        let name = module_name(bytes.as_slice()).unwrap();
        assert_eq!(name, "example.module");
    }

    #[test]
    fn test_rejects_bad_magic() {
        let result = module_name(&b"PK\x03\x04not a class"[..]);
        assert!(matches!(result, Err(ScoutError::Descriptor(_))));
    }

    #[test]
    fn test_rejects_truncated_input() {
        let mut bytes = synthetic_descriptor("example.module");
        bytes.truncate(20);
        assert!(module_name(bytes.as_slice()).is_err());
    }
}
