// Name-based dispatch for the interpreted execution mode.
//
// Compiled programs bind the typed functions directly; the interpreter
// resolves the same primitives by dotted name through this table, so both
// execution modes share one implementation. Model lifecycle operations are
// deliberately absent here: the typed `Model` handle obtained from `spawn`
// is the only lifecycle path, which keeps use-before-spawn unrepresentable
// in both modes.

use crate::emit::Emit;
use crate::value::{RuntimeError, Value, ValueKind};
use crate::{math, net, system, ui};
use std::io;

/// Enumeration of the runtime primitives addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFn {
    Log,
    SysLog,
    SysPoll,
    JoySay,
    JoyInit,
    JoyLoop,
    NetFetch,
    VoidAbsorb,
    VoidSynthesizeLib,
    TimeSleep,
    TimeNow,
    MathSqrt,
    MathPow,
    MathSin,
    MathCos,
    MathAbs,
    MathMin,
    MathMax,
    JsonParse,
    JsonStringify,
}

impl BuiltinFn {
    /// Get the dotted name the language surface uses.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinFn::Log => "log",
            BuiltinFn::SysLog => "sys.log",
            BuiltinFn::SysPoll => "sys.poll",
            BuiltinFn::JoySay => "joy.say",
            BuiltinFn::JoyInit => "joy.init",
            BuiltinFn::JoyLoop => "joy.loop",
            BuiltinFn::NetFetch => "net.fetch",
            BuiltinFn::VoidAbsorb => "void.absorb",
            BuiltinFn::VoidSynthesizeLib => "void.synthesize_lib",
            BuiltinFn::TimeSleep => "time.sleep",
            BuiltinFn::TimeNow => "time.now",
            BuiltinFn::MathSqrt => "math.sqrt",
            BuiltinFn::MathPow => "math.pow",
            BuiltinFn::MathSin => "math.sin",
            BuiltinFn::MathCos => "math.cos",
            BuiltinFn::MathAbs => "math.abs",
            BuiltinFn::MathMin => "math.min",
            BuiltinFn::MathMax => "math.max",
            BuiltinFn::JsonParse => "json.parse",
            BuiltinFn::JsonStringify => "json.stringify",
        }
    }

    /// Parse a dotted name into a `BuiltinFn`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "log" => Some(BuiltinFn::Log),
            "sys.log" => Some(BuiltinFn::SysLog),
            "sys.poll" => Some(BuiltinFn::SysPoll),
            "joy.say" => Some(BuiltinFn::JoySay),
            "joy.init" => Some(BuiltinFn::JoyInit),
            "joy.loop" => Some(BuiltinFn::JoyLoop),
            "net.fetch" => Some(BuiltinFn::NetFetch),
            "void.absorb" => Some(BuiltinFn::VoidAbsorb),
            "void.synthesize_lib" => Some(BuiltinFn::VoidSynthesizeLib),
            "time.sleep" => Some(BuiltinFn::TimeSleep),
            "time.now" => Some(BuiltinFn::TimeNow),
            "math.sqrt" => Some(BuiltinFn::MathSqrt),
            "math.pow" => Some(BuiltinFn::MathPow),
            "math.sin" => Some(BuiltinFn::MathSin),
            "math.cos" => Some(BuiltinFn::MathCos),
            "math.abs" => Some(BuiltinFn::MathAbs),
            "math.min" => Some(BuiltinFn::MathMin),
            "math.max" => Some(BuiltinFn::MathMax),
            "json.parse" => Some(BuiltinFn::JsonParse),
            "json.stringify" => Some(BuiltinFn::JsonStringify),
            _ => None,
        }
    }

    /// Get expected argument count.
    pub fn arity(&self) -> usize {
        match self {
            BuiltinFn::SysPoll
            | BuiltinFn::JoyInit
            | BuiltinFn::JoyLoop
            | BuiltinFn::TimeNow => 0,
            BuiltinFn::Log
            | BuiltinFn::SysLog
            | BuiltinFn::JoySay
            | BuiltinFn::NetFetch
            | BuiltinFn::VoidAbsorb
            | BuiltinFn::TimeSleep
            | BuiltinFn::MathSqrt
            | BuiltinFn::MathSin
            | BuiltinFn::MathCos
            | BuiltinFn::MathAbs
            | BuiltinFn::JsonParse
            | BuiltinFn::JsonStringify => 1,
            BuiltinFn::VoidSynthesizeLib
            | BuiltinFn::MathPow
            | BuiltinFn::MathMin
            | BuiltinFn::MathMax => 2,
        }
    }
}

/// Resolve `name` and call the builtin with the given arguments.
pub fn call_named(name: &str, args: Vec<Value>) -> Result<Value, RuntimeError> {
    let func =
        BuiltinFn::from_name(name).ok_or_else(|| RuntimeError::UnknownFunction(name.to_string()))?;
    call_builtin(func, args)
}

/// Call a builtin with the given arguments.
///
/// Arity is checked first, then argument kinds; the work is delegated to
/// the same functions the typed surface binds. Effect-only builtins report
/// the integer 0, the toolchain's conventional "nothing" result.
pub fn call_builtin(func: BuiltinFn, args: Vec<Value>) -> Result<Value, RuntimeError> {
    if args.len() != func.arity() {
        return Err(RuntimeError::ArityMismatch {
            fn_name: func.name().to_string(),
            expected: func.arity(),
            found: args.len(),
        });
    }

    match func {
        BuiltinFn::Log => builtin_log(args),
        BuiltinFn::SysLog => {
            system::sys_log(expect_str(func, &args[0])?);
            Ok(Value::Int(0))
        }
        BuiltinFn::SysPoll => Ok(Value::Int(system::poll())),
        BuiltinFn::JoySay => {
            ui::say(expect_str(func, &args[0])?);
            Ok(Value::Int(0))
        }
        BuiltinFn::JoyInit => {
            ui::ui_init();
            Ok(Value::Int(0))
        }
        BuiltinFn::JoyLoop => {
            ui::ui_loop();
            Ok(Value::Int(0))
        }
        BuiltinFn::NetFetch => Ok(Value::Str(net::fetch(expect_str(func, &args[0])?))),
        BuiltinFn::VoidAbsorb => Ok(Value::Str(net::absorb(expect_str(func, &args[0])?))),
        BuiltinFn::VoidSynthesizeLib => {
            net::synthesize_library(expect_str(func, &args[0])?, expect_str(func, &args[1])?);
            Ok(Value::Int(0))
        }
        BuiltinFn::TimeSleep => {
            system::sleep_ms(expect_int(func, &args[0])?);
            Ok(Value::Int(0))
        }
        BuiltinFn::TimeNow => Ok(Value::Int(system::time_now())),
        BuiltinFn::MathSqrt => Ok(Value::Int(math::sqrt(expect_int(func, &args[0])?))),
        BuiltinFn::MathPow => Ok(Value::Int(math::pow(
            expect_int(func, &args[0])?,
            expect_int(func, &args[1])?,
        ))),
        BuiltinFn::MathSin => Ok(Value::Int(math::sin(expect_int(func, &args[0])?))),
        BuiltinFn::MathCos => Ok(Value::Int(math::cos(expect_int(func, &args[0])?))),
        BuiltinFn::MathAbs => Ok(Value::Int(math::abs(expect_int(func, &args[0])?))),
        BuiltinFn::MathMin => Ok(Value::Int(math::min(
            expect_int(func, &args[0])?,
            expect_int(func, &args[1])?,
        ))),
        BuiltinFn::MathMax => Ok(Value::Int(math::max(
            expect_int(func, &args[0])?,
            expect_int(func, &args[1])?,
        ))),
        BuiltinFn::JsonParse => builtin_json_parse(args),
        BuiltinFn::JsonStringify => builtin_json_stringify(args),
    }
}

fn expect_int(func: BuiltinFn, value: &Value) -> Result<i64, RuntimeError> {
    match value {
        Value::Int(i) => Ok(*i),
        other => Err(argument_error(func, ValueKind::Int, other)),
    }
}

fn expect_str<'a>(func: BuiltinFn, value: &'a Value) -> Result<&'a str, RuntimeError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(argument_error(func, ValueKind::Str, other)),
    }
}

fn argument_error(func: BuiltinFn, expected: ValueKind, found: &Value) -> RuntimeError {
    RuntimeError::TypeError {
        expected: expected.name().to_string(),
        found: found.type_name().to_string(),
        message: format!("{} requires a {} argument", func.name(), expected),
    }
}

fn builtin_log(args: Vec<Value>) -> Result<Value, RuntimeError> {
    // The tag switch happens inside Value's Emit impl.
    let _ = args[0].emit_to(&mut io::stdout());
    Ok(Value::Int(0))
}

fn builtin_json_stringify(args: Vec<Value>) -> Result<Value, RuntimeError> {
    let text =
        serde_json::to_string(&args[0]).map_err(|e| RuntimeError::JsonError(e.to_string()))?;
    Ok(Value::Str(text))
}

fn builtin_json_parse(args: Vec<Value>) -> Result<Value, RuntimeError> {
    let text = expect_str(BuiltinFn::JsonParse, &args[0])?;
    let parsed: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RuntimeError::JsonError(e.to_string()))?;

    match parsed {
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::String(s) => Ok(Value::Str(s)),
        serde_json::Value::Number(n) => {
            n.as_i64()
                .map(Value::Int)
                .ok_or_else(|| RuntimeError::TypeError {
                    expected: "Int".to_string(),
                    found: "Number".to_string(),
                    message: format!("{} is not a 64-bit integer", n),
                })
        }
        other => Err(RuntimeError::TypeError {
            expected: "scalar".to_string(),
            found: json_kind(&other).to_string(),
            message: "the eMo primitive set has no aggregate kinds".to_string(),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "Null",
        serde_json::Value::Bool(_) => "Bool",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "Array",
        serde_json::Value::Object(_) => "Object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips() {
        let all = [
            BuiltinFn::Log,
            BuiltinFn::SysLog,
            BuiltinFn::SysPoll,
            BuiltinFn::JoySay,
            BuiltinFn::JoyInit,
            BuiltinFn::JoyLoop,
            BuiltinFn::NetFetch,
            BuiltinFn::VoidAbsorb,
            BuiltinFn::VoidSynthesizeLib,
            BuiltinFn::TimeSleep,
            BuiltinFn::TimeNow,
            BuiltinFn::MathSqrt,
            BuiltinFn::MathPow,
            BuiltinFn::MathSin,
            BuiltinFn::MathCos,
            BuiltinFn::MathAbs,
            BuiltinFn::MathMin,
            BuiltinFn::MathMax,
            BuiltinFn::JsonParse,
            BuiltinFn::JsonStringify,
        ];
        for func in all {
            assert_eq!(BuiltinFn::from_name(func.name()), Some(func));
        }
        assert_eq!(BuiltinFn::from_name("mind.spawn_model"), None);
        assert_eq!(BuiltinFn::from_name("unknown_fn"), None);
    }

    #[test]
    fn test_call_named_unknown_function() {
        let result = call_named("no.such", vec![]);
        assert_eq!(
            result,
            Err(RuntimeError::UnknownFunction("no.such".to_string()))
        );
    }

    #[test]
    fn test_arity_mismatch_details() {
        let args = vec![Value::Int(1), Value::Int(2)];
        match call_builtin(BuiltinFn::MathSqrt, args) {
            Err(RuntimeError::ArityMismatch {
                fn_name,
                expected,
                found,
            }) => {
                assert_eq!(fn_name, "math.sqrt");
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected ArityMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_argument_kind_checked() {
        let result = call_builtin(BuiltinFn::NetFetch, vec![Value::Int(3)]);
        match result {
            Err(RuntimeError::TypeError {
                expected, found, ..
            }) => {
                assert_eq!(expected, "Str");
                assert_eq!(found, "Int");
            }
            other => panic!("expected TypeError, got {:?}", other),
        }

        let result = call_builtin(BuiltinFn::TimeSleep, vec![Value::Str("x".to_string())]);
        assert!(result.is_err());
    }

    #[test]
    fn test_poll_builtin_reports_zero() {
        let result = call_builtin(BuiltinFn::SysPoll, vec![]).unwrap();
        assert_eq!(result, Value::Int(0));
    }

    #[test]
    fn test_fetch_builtin_returns_payload() {
        let args = vec![Value::Str("http://example.com".to_string())];
        let result = call_builtin(BuiltinFn::NetFetch, args).unwrap();
        assert_eq!(result, Value::Str(crate::net::FETCH_PAYLOAD.to_string()));
    }

    #[test]
    fn test_absorb_builtin_returns_token() {
        let args = vec![Value::Str("http://example.com".to_string())];
        let result = call_builtin(BuiltinFn::VoidAbsorb, args).unwrap();
        assert_eq!(result, Value::Str(crate::net::ABSORB_TOKEN.to_string()));
    }

    #[test]
    fn test_log_accepts_every_kind() {
        for value in [
            Value::Int(1),
            Value::Str("x".to_string()),
            Value::Bool(true),
        ] {
            assert_eq!(call_builtin(BuiltinFn::Log, vec![value]), Ok(Value::Int(0)));
        }
    }

    #[test]
    fn test_math_builtins() {
        let sqrt = call_builtin(BuiltinFn::MathSqrt, vec![Value::Int(17)]).unwrap();
        assert_eq!(sqrt, Value::Int(4));

        let pow = call_builtin(BuiltinFn::MathPow, vec![Value::Int(2), Value::Int(8)]).unwrap();
        assert_eq!(pow, Value::Int(256));

        let min = call_builtin(BuiltinFn::MathMin, vec![Value::Int(4), Value::Int(-2)]).unwrap();
        assert_eq!(min, Value::Int(-2));
    }

    #[test]
    fn test_time_now_builtin() {
        let result = call_builtin(BuiltinFn::TimeNow, vec![]).unwrap();
        match result {
            Value::Int(secs) => assert!(secs > 1_500_000_000),
            other => panic!("expected Int, got {:?}", other),
        }
    }

    #[test]
    fn test_json_stringify_scalars() {
        let cases = [
            (Value::Int(5), "5"),
            (Value::Str("x".to_string()), "\"x\""),
            (Value::Bool(true), "true"),
        ];
        for (value, expected) in cases {
            let result = call_builtin(BuiltinFn::JsonStringify, vec![value]).unwrap();
            assert_eq!(result, Value::Str(expected.to_string()));
        }
    }

    #[test]
    fn test_json_parse_scalars() {
        let result = call_builtin(BuiltinFn::JsonParse, vec![Value::Str("5".to_string())]);
        assert_eq!(result, Ok(Value::Int(5)));

        let result = call_builtin(BuiltinFn::JsonParse, vec![Value::Str("\"x\"".to_string())]);
        assert_eq!(result, Ok(Value::Str("x".to_string())));

        let result = call_builtin(BuiltinFn::JsonParse, vec![Value::Str("false".to_string())]);
        assert_eq!(result, Ok(Value::Bool(false)));
    }

    #[test]
    fn test_json_parse_rejects_aggregates() {
        for text in ["[1, 2]", "{\"a\": 1}", "null"] {
            let result = call_builtin(BuiltinFn::JsonParse, vec![Value::Str(text.to_string())]);
            assert!(result.is_err(), "expected rejection of {}", text);
        }
    }

    #[test]
    fn test_json_parse_rejects_invalid_input() {
        let result = call_builtin(BuiltinFn::JsonParse, vec![Value::Str("not json".to_string())]);
        match result {
            Err(RuntimeError::JsonError(_)) => {}
            other => panic!("expected JsonError, got {:?}", other),
        }
    }
}
