use super::*;

fn run(order: DeclarationOrder, text: &str) -> Vec<Finding> {
    DeclarationOrderCheck::new(order).check(&AnalysisSnapshot::prepare(text))
}

#[test]
fn ranks_must_be_distinct_and_in_range() {
    assert!(DeclarationOrder::new(1, 2, 3).is_ok());
    assert!(DeclarationOrder::new(3, 1, 2).is_ok());

    let err = DeclarationOrder::new(1, 1, 3).unwrap_err();
    assert!(err.to_string().contains("distinct"));
    let err = DeclarationOrder::new(0, 2, 3).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(DeclarationOrder::new(1, 2, 4).is_err());
}

#[test]
fn sequence_follows_ranks() {
    let order = DeclarationOrder::new(3, 1, 2).unwrap();
    assert_eq!(
        order.sequence(),
        [AccessKind::Protected, AccessKind::Private, AccessKind::Public]
    );
}

#[test]
fn in_order_class_passes() {
    let text = "class A {\npublic:\n  A();\nprotected:\n  int b;\nprivate:\n  int c;\n};\n";
    assert!(run(DeclarationOrder::default(), text).is_empty());
}

#[test]
fn private_before_public_is_reported_at_the_late_label() {
    let text = "class A {\nprivate:\n  int m_X;\npublic:\n  A();\n};\n";
    let findings = run(DeclarationOrder::default(), text);

    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(finding.rule.tag(), "DCL");
    assert_eq!(finding.line, 4);
    assert!(finding.is_error());
    assert_eq!(
        finding.description,
        "public section appears after private section at line 2 (expected order: public, protected, private)"
    );
}

#[test]
fn custom_order_is_honoured() {
    let text = "class A {\nprivate:\n  int m_X;\npublic:\n  A();\n};\n";
    let order = DeclarationOrder::new(2, 3, 1).unwrap();
    assert!(run(order, text).is_empty());
}

#[test]
fn repeated_sections_are_compared_with_the_furthest_one() {
    let text = "\
class A {
public:
  A();
private:
  int a;
public:
  void f();
protected:
  int b;
};
";
    let findings = run(DeclarationOrder::default(), text);
    let lines: Vec<_> = findings.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![6, 8]);
}

#[test]
fn implicit_default_region_is_not_ordered() {
    let text = "class A {\n  int hidden;\npublic:\n  A();\n};\n";
    assert!(run(DeclarationOrder::default(), text).is_empty());
}

#[test]
fn nested_classes_are_checked_independently() {
    let text = "\
class Outer {
public:
  class Inner {
  private:
    int a;
  public:
    Inner();
  };
private:
  int b;
};
";
    let findings = run(DeclarationOrder::default(), text);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 6);
}

#[test]
fn file_without_class_records_info_only() {
    let findings = run(DeclarationOrder::default(), "int main() { return 0; }\n");
    assert_eq!(findings.len(), 1);
    assert!(!findings[0].is_error());
    assert_eq!(findings[0].description, "no class declaration found");
}
