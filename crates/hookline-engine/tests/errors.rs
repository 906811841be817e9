//! Error propagation through dispatch.

mod common;

use common::*;
use hookline_engine::{Class, ClassBuilder, HandlerRef, NoMethodError, Value, ValueError};

fn advised(configure: impl FnOnce(&mut ClassBuilder<Tracer, TestError>)) -> Class<Tracer, TestError> {
    init_tracing();
    let mut builder = ClassBuilder::new("Foo");
    configure(&mut builder);
    builder.build().unwrap()
}

fn op(this: &mut Tracer) -> Result<&'static str, TestError> {
    this.push("op");
    Ok("done")
}

#[test]
fn test_before_advice_error_skips_operation() {
    let class = advised(|b| {
        b.before("bar", mark("A"))
            .before("bar", fail("B"))
            .after("bar", mark("C"))
            .after("bar", mark("D"));
    });

    let mut tracer = Tracer::new();
    let result = class.dispatch("bar", &mut tracer, &[], op);
    assert_eq!(result, Err(TestError::Boom("B")));
    assert_eq!(tracer.trace, ["A"]);
}

#[test]
fn test_operation_error_skips_after_advice() {
    let class = advised(|b| {
        b.before("bar", mark("A")).after("bar", mark("C"));
    });

    let mut tracer = Tracer::new();
    let result: Result<(), _> = class.dispatch("bar", &mut tracer, &[], |this| {
        this.push("op");
        Err(TestError::Boom("op"))
    });
    assert_eq!(result, Err(TestError::Boom("op")));
    assert_eq!(tracer.trace, ["A", "op"]);
}

#[test]
fn test_after_advice_error_discards_result() {
    let class = advised(|b| {
        b.after("bar", mark("C"))
            .after("bar", fail("D"))
            .after("bar", mark("E"));
    });

    let mut tracer = Tracer::new();
    let result = class.dispatch("bar", &mut tracer, &[], op);
    assert_eq!(result, Err(TestError::Boom("D")));
    assert_eq!(tracer.trace, ["op", "C"]);
}

#[test]
fn test_named_handler_error_keeps_identity() {
    let class = advised(|b| {
        b.operation("check", |_, _, args| match args.first() {
            Some(Value::Int(n)) if *n < 0 => Err(TestError::Boom("negative")),
            _ => Ok(()),
        });
        b.before("bar", HandlerRef::named("check"));
    });

    let mut tracer = Tracer::new();
    assert_eq!(class.dispatch("bar", &mut tracer, &[Value::int(3)], op), Ok("done"));

    let err = class
        .dispatch("bar", &mut tracer, &[Value::int(-3)], op)
        .unwrap_err();
    assert!(matches!(err, TestError::Boom("negative")));
    assert_eq!(tracer.trace, ["op"]);
}

#[test]
fn test_nested_dispatch_error_propagates_outward() {
    let class = advised(|b| {
        b.operation("inner", |class, this, args| {
            class.dispatch("inner", this, args, |_| Err::<(), _>(TestError::Boom("inner")))
        });
        b.operation("outer", |class, this, args| {
            class.dispatch("outer", this, args, |this| {
                this.push("outer");
                Ok(())
            })
        });
        b.before("outer", HandlerRef::named("inner"));
        b.after("inner", mark("inner:after"));
    });

    let mut tracer = Tracer::new();
    let result = class.call(&mut tracer, "outer", &[]);
    assert_eq!(result, Err(TestError::Boom("inner")));
    assert!(tracer.trace.is_empty());
}

#[test]
fn test_unresolved_name_is_no_method_error() {
    let class = advised(|_| {});
    let mut tracer = Tracer::new();

    match class.call(&mut tracer, "missing", &[]) {
        Err(TestError::NoMethod(NoMethodError { class, operation })) => {
            assert_eq!(class, "Foo");
            assert_eq!(operation, "missing");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_argument_conversion_error_aborts_dispatch() {
    let class = advised(|b| {
        b.before("greet", mark_with_arg("hello"));
    });
    let mut tracer = Tracer::new();

    let missing = class.dispatch("greet", &mut tracer, &[], op);
    assert_eq!(
        missing,
        Err(TestError::Value(ValueError::MissingArgument { index: 0 }))
    );

    let mismatch = class.dispatch("greet", &mut tracer, &[Value::int(7)], op);
    assert_eq!(
        mismatch,
        Err(TestError::Value(ValueError::TypeMismatch {
            expected: "string",
            got: "int",
        }))
    );
    assert!(tracer.trace.is_empty());

    class
        .dispatch("greet", &mut tracer, &[Value::str("ada")], op)
        .unwrap();
    assert_eq!(tracer.trace, ["hello", "ada", "op"]);
}
