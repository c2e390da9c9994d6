//! Contract interface specifications, as embedded in Wasm custom sections:
//! the type-description language plus the entry kinds (functions and
//! user-defined types).

use crate::contract::ScSymbol;
use crate::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::{VarArray, XdrString};

xdr_enum! {
    /// Type constructors for contract interfaces. Scalar kinds are dense
    /// small values; parameterized containers start at 1000 and user-defined
    /// types at 2000, matching the schema's reserved ranges.
    pub enum ScSpecType {
        Val = 0,
        Bool = 1,
        Void = 2,
        Error = 3,
        U32 = 4,
        I32 = 5,
        U64 = 6,
        I64 = 7,
        Timepoint = 8,
        Duration = 9,
        U128 = 10,
        I128 = 11,
        U256 = 12,
        I256 = 13,
        Bytes = 14,
        String = 16,
        Symbol = 17,
        Address = 19,
        Option = 1000,
        Result = 1001,
        Vec = 1002,
        Map = 1004,
        Tuple = 1005,
        BytesN = 1006,
        Udt = 2000,
    }
}

xdr_struct! {
    pub struct ScSpecTypeOption {
        pub value_type: Box<ScSpecTypeDef>,
    }
}

xdr_struct! {
    pub struct ScSpecTypeResult {
        pub ok_type: Box<ScSpecTypeDef>,
        pub error_type: Box<ScSpecTypeDef>,
    }
}

xdr_struct! {
    pub struct ScSpecTypeVec {
        pub element_type: Box<ScSpecTypeDef>,
    }
}

xdr_struct! {
    pub struct ScSpecTypeMap {
        pub key_type: Box<ScSpecTypeDef>,
        pub value_type: Box<ScSpecTypeDef>,
    }
}

xdr_struct! {
    pub struct ScSpecTypeTuple {
        pub value_types: VarArray<ScSpecTypeDef, 12>,
    }
}

xdr_struct! {
    pub struct ScSpecTypeBytesN {
        pub n: u32,
    }
}

xdr_struct! {
    pub struct ScSpecTypeUdt {
        pub name: XdrString<60>,
    }
}

xdr_union! {
    /// A type expression. Containers nest through boxed definitions; decode
    /// depth is bounded by the reader.
    pub enum ScSpecTypeDef : ScSpecType {
        ScSpecType::Val => Val,
        ScSpecType::Bool => Bool,
        ScSpecType::Void => Void,
        ScSpecType::Error => Error,
        ScSpecType::U32 => U32,
        ScSpecType::I32 => I32,
        ScSpecType::U64 => U64,
        ScSpecType::I64 => I64,
        ScSpecType::Timepoint => Timepoint,
        ScSpecType::Duration => Duration,
        ScSpecType::U128 => U128,
        ScSpecType::I128 => I128,
        ScSpecType::U256 => U256,
        ScSpecType::I256 => I256,
        ScSpecType::Bytes => Bytes,
        ScSpecType::String => String,
        ScSpecType::Symbol => Symbol,
        ScSpecType::Address => Address,
        ScSpecType::Option => Option(ScSpecTypeOption),
        ScSpecType::Result => Result(ScSpecTypeResult),
        ScSpecType::Vec => Vec(ScSpecTypeVec),
        ScSpecType::Map => Map(ScSpecTypeMap),
        ScSpecType::Tuple => Tuple(ScSpecTypeTuple),
        ScSpecType::BytesN => BytesN(ScSpecTypeBytesN),
        ScSpecType::Udt => Udt(ScSpecTypeUdt),
    }
}

xdr_struct! {
    pub struct ScSpecUdtStructFieldV0 {
        pub doc: XdrString<1024>,
        pub name: XdrString<30>,
        pub type_: ScSpecTypeDef,
    }
}

xdr_struct! {
    pub struct ScSpecUdtStructV0 {
        pub doc: XdrString<1024>,
        pub lib: XdrString<80>,
        pub name: XdrString<60>,
        pub fields: VarArray<ScSpecUdtStructFieldV0, 40>,
    }
}

xdr_struct! {
    pub struct ScSpecUdtUnionCaseVoidV0 {
        pub doc: XdrString<1024>,
        pub name: XdrString<60>,
    }
}

xdr_struct! {
    pub struct ScSpecUdtUnionCaseTupleV0 {
        pub doc: XdrString<1024>,
        pub name: XdrString<60>,
        pub type_: VarArray<ScSpecTypeDef, 12>,
    }
}

xdr_enum! {
    pub enum ScSpecUdtUnionCaseV0Kind {
        VoidV0 = 0,
        TupleV0 = 1,
    }
}

xdr_union! {
    pub enum ScSpecUdtUnionCaseV0 : ScSpecUdtUnionCaseV0Kind {
        ScSpecUdtUnionCaseV0Kind::VoidV0 => VoidV0(ScSpecUdtUnionCaseVoidV0),
        ScSpecUdtUnionCaseV0Kind::TupleV0 => TupleV0(ScSpecUdtUnionCaseTupleV0),
    }
}

xdr_struct! {
    pub struct ScSpecUdtUnionV0 {
        pub doc: XdrString<1024>,
        pub lib: XdrString<80>,
        pub name: XdrString<60>,
        pub cases: VarArray<ScSpecUdtUnionCaseV0, 50>,
    }
}

xdr_struct! {
    pub struct ScSpecUdtEnumCaseV0 {
        pub doc: XdrString<1024>,
        pub name: XdrString<60>,
        pub value: u32,
    }
}

xdr_struct! {
    pub struct ScSpecUdtEnumV0 {
        pub doc: XdrString<1024>,
        pub lib: XdrString<80>,
        pub name: XdrString<60>,
        pub cases: VarArray<ScSpecUdtEnumCaseV0, 50>,
    }
}

xdr_struct! {
    pub struct ScSpecUdtErrorEnumCaseV0 {
        pub doc: XdrString<1024>,
        pub name: XdrString<60>,
        pub value: u32,
    }
}

xdr_struct! {
    pub struct ScSpecUdtErrorEnumV0 {
        pub doc: XdrString<1024>,
        pub lib: XdrString<80>,
        pub name: XdrString<60>,
        pub cases: VarArray<ScSpecUdtErrorEnumCaseV0, 50>,
    }
}

xdr_struct! {
    pub struct ScSpecFunctionInputV0 {
        pub doc: XdrString<1024>,
        pub name: XdrString<30>,
        pub type_: ScSpecTypeDef,
    }
}

xdr_struct! {
    pub struct ScSpecFunctionV0 {
        pub doc: XdrString<1024>,
        pub name: ScSymbol,
        pub inputs: VarArray<ScSpecFunctionInputV0, 10>,
        pub outputs: VarArray<ScSpecTypeDef, 1>,
    }
}

xdr_enum! {
    pub enum ScSpecEntryKind {
        FunctionV0 = 0,
        UdtStructV0 = 1,
        UdtUnionV0 = 2,
        UdtEnumV0 = 3,
        UdtErrorEnumV0 = 4,
    }
}

xdr_union! {
    /// One entry of a contract's interface specification.
    pub enum ScSpecEntry : ScSpecEntryKind {
        ScSpecEntryKind::FunctionV0 => FunctionV0(ScSpecFunctionV0),
        ScSpecEntryKind::UdtStructV0 => UdtStructV0(ScSpecUdtStructV0),
        ScSpecEntryKind::UdtUnionV0 => UdtUnionV0(ScSpecUdtUnionV0),
        ScSpecEntryKind::UdtEnumV0 => UdtEnumV0(ScSpecUdtEnumV0),
        ScSpecEntryKind::UdtErrorEnumV0 => UdtErrorEnumV0(ScSpecUdtErrorEnumV0),
    }
}
