use super::check_table;

#[test]
fn test_variable_assignments() {
    check_table(&[
        ("def {x} 100", "()"),
        ("def {y} 200", "()"),
        ("x", "100"),
        ("y", "200"),
        ("+ x y", "300"),
        ("def {a b} 5 6", "()"),
        ("+ a b", "11"),
        ("def {arglist} {a b x y}", "()"),
        ("arglist", "{a b x y}"),
        ("def arglist 1 2 3 4", "()"),
        ("list a b x y", "{1 2 3 4}"),
        ("= {x} 7", "()"),
        ("x", "7"),
    ]);
}

#[test]
fn test_function_definitions() {
    check_table(&[
        ("(\\ {x y} {+ x y})", "(\\ {x y} {+ x y})"),
        ("(\\ {x y} {+ x y}) 10 20", "30"),
        ("def {add-together} (\\ {x y} {+ x y})", "()"),
        ("add-together", "(\\ {x y} {+ x y})"),
        ("add-together 10 20", "30"),
        // unchanged by the call
        ("add-together", "(\\ {x y} {+ x y})"),
        ("def {add-mul} (\\ {x y} {+ x (* x y)})", "()"),
        ("add-mul", "(\\ {x y} {+ x (* x y)})"),
        ("add-mul 10 20", "210"),
        ("add-mul 10", "(\\ {y} {+ x (* x y)})"),
        ("def {add-mul-ten} (add-mul 10)", "()"),
        ("add-mul-ten", "(\\ {y} {+ x (* x y)})"),
        ("add-mul 10 50", "510"),
        ("add-mul-ten 50", "510"),
        ("(add-mul 10) 50", "510"),
        ("add-mul", "(\\ {x y} {+ x (* x y)})"),
        ("add-mul-ten", "(\\ {y} {+ x (* x y)})"),
        (
            "(\\ {x} {x}) 1 2",
            "Error: Function passed too many arguments. Got 2, Expected 1.",
        ),
    ]);
}

#[test]
fn test_variable_args_and_currying() {
    check_table(&[
        (
            "\\ {args body} {def (head args) (\\ (tail args) body)}",
            "(\\ {args body} {def (head args) (\\ (tail args) body)})",
        ),
        ("fun {add-together x y} {+ x y}", "()"),
        ("add-together 1 2", "3"),
        ("curry + {5 6 7}", "18"),
        ("uncurry head 5 6 7", "{5}"),
        ("def {add-uncurried} +", "()"),
        ("def {add-curried} (curry +)", "()"),
        ("add-curried {5 6 7}", "18"),
        ("add-uncurried 5 6 7", "18"),
        ("(\\ {& xs} {xs}) 1 2 3", "{1 2 3}"),
        ("(\\ {x & xs} {xs}) 1", "{}"),
        ("(\\ {x & xs} {x}) 1 2 3", "1"),
        (
            "(\\ {x &} {x}) 1",
            "Error: Function format invalid. Symbol '&' not followed by single symbol.",
        ),
    ]);
}

#[test]
fn test_recursive_functions() {
    check_table(&[
        (
            "(fun {len l} {
                if (== l {})
                    {0}
                    {+ 1 (len (tail l))}
            })",
            "()",
        ),
        (
            "(fun {reverse l} {
                if (== l {})
                    {{}}
                    {join (reverse (tail l)) (head l)}
            })",
            "()",
        ),
        ("len {}", "0"),
        ("len {1 2 3}", "3"),
        ("reverse {}", "{}"),
        ("reverse {1 2 3}", "{3 2 1}"),
    ]);
}

#[test]
fn test_global_and_local_scope() {
    check_table(&[
        ("def {x} 100", "()"),
        // a sibling scope still sees the global definition
        ("fun {peek _} {x}", "()"),
        ("peek ()", "100"),
        // `=` inside a body binds in the call's own scope
        ("fun {set-local v} {= {hidden} v}", "()"),
        ("set-local 5", "()"),
        ("hidden", "Error: Unbound Symbol: 'hidden'"),
        ("fun {shadow x} {x}", "()"),
        ("shadow 7", "7"),
        ("x", "100"),
        ("let {do (= {z} 3) (+ z 1)}", "4"),
        ("z", "Error: Unbound Symbol: 'z'"),
    ]);
}

#[test]
fn test_free_variables_resolve_at_call_site() {
    check_table(&[
        ("fun {get-n _} {n}", "()"),
        ("get-n ()", "Error: Unbound Symbol: 'n'"),
        ("fun {with-n n} {get-n ()}", "()"),
        ("with-n 42", "42"),
    ]);
}
