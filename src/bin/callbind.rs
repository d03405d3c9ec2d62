//! CLI wrapper for the callbind binding engine.
//!
//! Usage:
//!   callbind -s "<signature>" -c "<call>"          # Print the bound frame
//!   callbind -s "<signature>" -c "<call>" --plan   # Also print the slot plan

use callbind::parser::parse_call;
use callbind::runtime::binding::{CallStub, Slot};
use callbind::runtime::shape::CallShape;
use callbind::runtime::signature::Signature;
use callbind::runtime::value::Value;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        5 if args[1] == "-s" && args[3] == "-c" => {
            run(&args[2], &args[4], false);
        }
        6 if args[1] == "-s" && args[3] == "-c" && args[5] == "--plan" => {
            run(&args[2], &args[4], true);
        }
        2 if args[1] == "-h" || args[1] == "--help" => {
            print_usage();
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("callbind - call-stub binding engine");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  callbind -s \"greet(who, {{greeting: 'hello'}})\" -c \"greet('world')\"");
    eprintln!("  callbind -s <signature> -c <call> --plan   Also print the slot plan");
}

fn run(signature_descriptor: &str, call_descriptor: &str, show_plan: bool) {
    let signature = match Signature::parse(signature_descriptor) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let call = match parse_call(call_descriptor) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Syntax error: bad call descriptor\n{}", e);
            process::exit(1);
        }
    };

    let positional: Vec<Value> = call.positional.iter().map(Value::from_literal).collect();
    let named: Vec<(String, Value)> = call
        .named
        .iter()
        .map(|(n, lit)| (n.to_string(), Value::from_literal(lit)))
        .collect();

    let shape = CallShape::of_call(&positional, &named);
    let stub = CallStub::compute(&signature, &shape);

    if show_plan {
        print_plan(&signature, &stub);
    }

    match stub.apply(positional, named) {
        Ok(frame) => {
            for (i, value) in frame.iter().enumerate() {
                println!("{} = {}", slot_name(&signature, i), value);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn slot_name(signature: &Signature, slot: usize) -> String {
    if slot < signature.arity() {
        signature.required[slot].to_string()
    } else {
        signature.named[slot - signature.arity()].name.to_string()
    }
}

fn print_plan(signature: &Signature, stub: &CallStub) {
    match stub {
        CallStub::Direct => println!("plan: direct (no adaptation needed)"),
        CallStub::Plan { slots, .. } => {
            println!("plan:");
            for (i, slot) in slots.iter().enumerate() {
                let source = match slot {
                    Slot::Positional(p) => format!("positional argument {}", p),
                    Slot::Named(k) => format!("named argument {}", k),
                    Slot::Default(v) => format!("default {}", v),
                };
                println!("  {} <- {}", slot_name(signature, i), source);
            }
        }
        CallStub::Mismatch(e) => println!("plan: mismatch ({})", e),
    }
}
