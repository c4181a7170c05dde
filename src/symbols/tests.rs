use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use super::{
    manager::ScopeManager,
    symbol::{DataType, FunctionInfo, Handle, Param, PassingMode},
};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_handles_are_sequential() {
    let mut scopes = ScopeManager::new();

    assert_eq!(scopes.declare_local("a").handle, Handle(1));
    assert_eq!(scopes.declare_local("b").handle, Handle(2));

    scopes.open_scope("TABLA DE LA FUNCION f");
    assert_eq!(scopes.declare_local("c").handle, Handle(3));
}

#[test]
fn test_ensure_returns_existing_symbol() {
    let mut scopes = ScopeManager::new();

    let first = scopes.ensure("x").handle;
    let second = scopes.ensure("x").handle;

    assert_eq!(first, second);
    assert_eq!(scopes.ensure("y").handle, Handle(2));
    assert_eq!(scopes.ensure("x").data_type, DataType::Unresolved);
}

#[test]
fn test_boolean_constants_are_typed_in_global_scope() {
    let mut scopes = ScopeManager::new();
    assert_eq!(scopes.ensure("true").data_type, DataType::Boolean);

    scopes.open_scope("TABLA DE LA FUNCION f");
    assert_eq!(scopes.ensure("false").data_type, DataType::Unresolved);
}

#[test]
fn test_lookup_local_and_lexical() {
    let mut scopes = ScopeManager::new();
    scopes.declare_local("g").data_type = DataType::Integer;

    scopes.open_scope("TABLA DE LA FUNCION f");
    scopes.declare_local("l").data_type = DataType::String;

    assert!(scopes.lookup_local("g").is_none());
    assert_eq!(scopes.lookup_lexical("g").map(|s| s.data_type), Some(DataType::Integer));
    assert_eq!(scopes.lookup_local("l").map(|s| s.data_type), Some(DataType::String));

    scopes.close_scope();
    assert!(scopes.lookup_lexical("l").is_none());
}

#[test]
fn test_inner_declaration_shadows_outer() {
    let mut scopes = ScopeManager::new();
    scopes.declare_local("x").data_type = DataType::Integer;

    scopes.open_scope("TABLA DE LA FUNCION f");
    scopes.declare_local("x").data_type = DataType::Boolean;

    assert_eq!(scopes.lookup_lexical("x").map(|s| s.data_type), Some(DataType::Boolean));
    scopes.close_scope();
    assert_eq!(scopes.lookup_lexical("x").map(|s| s.data_type), Some(DataType::Integer));
}

#[test]
fn test_symbol_by_handle_follows_scope_lifetime() {
    let mut scopes = ScopeManager::new();
    let global = scopes.declare_local("a").handle;

    scopes.open_scope("TABLA DE LA FUNCION f");
    let local = scopes.declare_local("b").handle;

    assert_eq!(scopes.symbol_by_handle(local).map(|s| s.lexeme.as_str()), Some("b"));
    scopes.close_scope();

    assert!(scopes.symbol_by_handle(local).is_none());
    assert_eq!(scopes.symbol_by_handle(global).map(|s| s.lexeme.as_str()), Some("a"));

    if let Some(symbol) = scopes.symbol_by_handle_mut(global) {
        symbol.data_type = DataType::Real;
    }
    assert_eq!(scopes.lookup_local("a").map(|s| s.data_type), Some(DataType::Real));
}

#[test]
fn test_scope_ids_increase() {
    let mut scopes = ScopeManager::new();
    assert_eq!(scopes.current_scope().map(|s| s.id), Some(1));

    assert_eq!(scopes.open_scope("TABLA DE LA FUNCION f"), 2);
    scopes.close_scope();
    assert_eq!(scopes.open_scope("TABLA DE LA FUNCION g"), 3);
    assert_eq!(scopes.depth(), 2);
}

#[test]
fn test_close_scope_with_nothing_open_is_noop() {
    let mut scopes = ScopeManager::new();
    scopes.close_all();
    assert_eq!(scopes.depth(), 0);

    let report = scopes.report().to_string();
    scopes.close_scope();
    assert_eq!(scopes.report(), report);
}

#[test]
fn test_report_variable_entry() {
    let mut scopes = ScopeManager::new();
    let symbol = scopes.declare_local("x");
    symbol.data_type = DataType::Integer;
    symbol.displacement = 0;

    let report = scopes.finish().unwrap();
    assert_eq!(
        report,
        "TABLA PRINCIPAL # 1 :\n\
         * LEXEMA : 'x'\n  ATRIBUTOS :\n  + tipo : 'entero'\n  + despl : 0\n--------- ----------\n\n"
    );
}

#[test]
fn test_report_function_entry() {
    let mut scopes = ScopeManager::new();
    let symbol = scopes.declare_local("f");
    symbol.data_type = DataType::Integer;
    let mut function = FunctionInfo::new("f", DataType::Integer);
    function.params.push(Param {
        data_type: DataType::String,
        mode: PassingMode::ByValue,
    });
    symbol.function = Some(function);

    let report = scopes.finish().unwrap();
    assert!(report.contains("* LEXEMA : 'f'\n"));
    assert!(report.contains("  + tipo : 'entero'\n"));
    assert!(report.contains("  + numParam : 1\n"));
    assert!(report.contains("  + TipoParam1 : 'cadena'\n"));
    assert!(report.contains("  + ModoParam1 : valor\n"));
    assert!(report.contains("  + TipoRetorno : 'entero'\n"));
    assert!(report.contains("  + EtiqFuncion : 'Etf'\n"));
    assert!(report.contains("* LEXEMA : 'f'\n  ATRIBUTOS :\n  + tipo : 'entero'\n  + despl : 0\n  + numParam : 1\n"));
}

#[test]
fn test_report_parameter_and_unresolved_entries() {
    let mut scopes = ScopeManager::new();
    scopes.declare_local("u");
    scopes.open_scope("TABLA DE LA FUNCION f");
    let param = scopes.declare_local("p");
    param.data_type = DataType::String;
    param.displacement = 0;
    param.is_parameter = true;

    let report = scopes.finish().unwrap();
    let function_start = report.find("TABLA DE LA FUNCION f # 2 :").unwrap();
    let global_start = report.find("TABLA PRINCIPAL # 1 :").unwrap();

    // Inner scopes close first.
    assert!(function_start < global_start);
    assert!(report.contains("  + tipo : 'cadena'\n  + despl : 0\n  + param : 1\n"));
    assert!(report.contains("* LEXEMA : 'u'\n  ATRIBUTOS :\n  + tipo : '-'\n  + despl : 0\n--------- ----------\n"));
}

#[test]
fn test_writer_receives_closed_scopes() {
    let buffer = SharedBuffer::default();
    let mut scopes = ScopeManager::with_writer(buffer.clone());
    scopes.declare_local("a");

    scopes.open_scope("TABLA DE LA FUNCION f");
    scopes.close_scope();
    let written = String::from_utf8(buffer.0.borrow().clone()).unwrap();
    assert!(written.starts_with("TABLA DE LA FUNCION f # 2 :\n"));

    let report = scopes.finish().unwrap();
    let written = String::from_utf8(buffer.0.borrow().clone()).unwrap();
    assert_eq!(written, report);
}

#[test]
fn test_writer_failure_surfaces_on_finish() {
    let scopes = ScopeManager::with_writer(FailingWriter);
    assert!(scopes.finish().is_err());
}

#[test]
fn test_widths() {
    assert_eq!(DataType::String.width(), 64);
    assert_eq!(DataType::Integer.width(), 1);
    assert_eq!(DataType::Real.width(), 1);
    assert_eq!(DataType::Boolean.width(), 1);
}
