use std::fmt::Display;

/// Largest number of parameters a function symbol records.
pub const MAX_PARAMS: usize = 10;

/// Process-wide unique identifier of a symbol, carried by identifier tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u32);

impl Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Unresolved,
    Integer,
    Real,
    Boolean,
    String,
    Void,
    Error,
}

impl DataType {
    /// Storage units taken by a variable of this type.
    pub fn width(&self) -> usize {
        match self {
            DataType::String => 64,
            _ => 1,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Real)
    }

    pub fn is_resolved(&self) -> bool {
        *self != DataType::Unresolved
    }

    /// Name used in the symbol-table report.
    pub fn report_name(&self) -> &'static str {
        match self {
            DataType::Unresolved => "-",
            DataType::Integer => "entero",
            DataType::Real => "real",
            DataType::Boolean => "boolean",
            DataType::String => "cadena",
            DataType::Void => "void",
            DataType::Error => "error",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Unresolved => "unresolved",
            DataType::Integer => "int",
            DataType::Real => "float",
            DataType::Boolean => "boolean",
            DataType::String => "string",
            DataType::Void => "void",
            DataType::Error => "error",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassingMode {
    ByValue,
}

impl Display for PassingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassingMode::ByValue => write!(f, "valor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub data_type: DataType,
    pub mode: PassingMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInfo {
    pub return_type: DataType,
    pub params: Vec<Param>,
    pub label: String,
}

impl FunctionInfo {
    pub fn new(name: &str, return_type: DataType) -> Self {
        FunctionInfo {
            return_type,
            params: vec![],
            label: format!("Et{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub lexeme: String,
    pub handle: Handle,
    pub data_type: DataType,
    /// Offset in the owning scope's frame. Stays 0 until a declaration assigns one.
    pub displacement: usize,
    pub is_parameter: bool,
    pub function: Option<FunctionInfo>,
}

impl Symbol {
    pub fn new(lexeme: &str, handle: Handle) -> Self {
        Symbol {
            lexeme: lexeme.to_string(),
            handle,
            data_type: DataType::Unresolved,
            displacement: 0,
            is_parameter: false,
            function: None,
        }
    }

    pub fn is_declared(&self) -> bool {
        self.data_type.is_resolved()
    }

    pub fn is_function(&self) -> bool {
        self.function.is_some()
    }
}

/// Renders one symbol block of the symbol-table report.
impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "* LEXEMA : '{}'", self.lexeme)?;
        writeln!(f, "  ATRIBUTOS :")?;
        writeln!(f, "  + tipo : '{}'", self.data_type.report_name())?;

        writeln!(f, "  + despl : {}", self.displacement)?;

        if let Some(function) = &self.function {
            writeln!(f, "  + numParam : {}", function.params.len())?;
            for (index, param) in function.params.iter().enumerate() {
                writeln!(f, "  + TipoParam{} : '{}'", index + 1, param.data_type.report_name())?;
                writeln!(f, "  + ModoParam{} : {}", index + 1, param.mode)?;
            }
            writeln!(f, "  + TipoRetorno : '{}'", function.return_type.report_name())?;
            writeln!(f, "  + EtiqFuncion : '{}'", function.label)?;
        }

        if self.is_parameter {
            writeln!(f, "  + param : 1")?;
        }

        writeln!(f, "--------- ----------")
    }
}
