use super::check_table;

#[test]
fn test_valid_integer_math() {
    check_table(&[
        ("+ 1 1", "2"),
        ("+ 2 -3", "-1"),
        ("- 3 2", "1"),
        ("- 100", "-100"),
        ("- 0", "0"),
        ("* -2 -3", "6"),
        ("* 2 3", "6"),
        ("* 2 -3", "-6"),
        ("/ 9 3", "3"),
        ("/ -9 3", "-3"),
        ("/ -9 -3", "3"),
        ("/ 7 3", "2"),
        ("+ 5 6", "11"),
        ("- (* 10 10) (+ 1 1 1)", "97"),
        ("+ 1 (* 7 5) 3", "39"),
        ("- 10 3 2", "5"),
        ("% 10 3", "1"),
        ("^ 2 10", "1024"),
        ("(+ 1 2)", "3"),
    ]);
}

#[test]
fn test_comparisons() {
    check_table(&[
        ("> 10 5", "1"),
        ("< 10 5", "0"),
        (">= 5 5", "1"),
        ("<= 88 5", "0"),
        ("== 5 6", "0"),
        ("== 5 {}", "0"),
        ("== 1 1", "1"),
        ("!= {} 56", "1"),
        ("== {1 2 3 { 5 6}} {1  2 3  {5 6}}", "1"),
        ("== \"a\" \"a\"", "1"),
        ("== + +", "1"),
        ("== + -", "0"),
    ]);
}

#[test]
fn test_conditionals() {
    check_table(&[
        ("def {x y} 100 200", "()"),
        ("if (== x y) {+ x y} {- x y}", "-100"),
        ("if (< x y) {+ x y} {- x y}", "300"),
        ("if 0 {1} {}", "()"),
        ("== nil {}", "1"),
        ("== true 1", "1"),
        ("== false 0", "1"),
        ("!= true false", "1"),
    ]);
}
