#[cfg(test)]
mod tests {
    use crate::{
        CommandSpec, ESCAPE_BINDING, Error, ModeSpec, TemplateEngine, VariableSpec, load_from_str,
        substitute_var,
    };

    fn foo_mode() -> ModeSpec {
        ModeSpec::new(
            "foo",
            vec![CommandSpec::new("s", "before {} after", vec!["arg1".into()])],
        )
        .with_command_template(Some("before {} after".into()))
    }

    #[test]
    fn mode_renders_block() {
        let expected = "mode \"$mode_foo\" {\n    bind s before arg1 after; mode \"default\"\n    bind Escape mode \"default\"\n}\n";
        assert_eq!(foo_mode().render().unwrap(), expected);
    }

    #[test]
    fn mode_description_is_first_line() {
        let out = foo_mode()
            .with_description(Some("Foo: (s)tart".into()))
            .render()
            .unwrap();
        assert_eq!(out.lines().next(), Some("set $mode_foo Foo: (s)tart"));
        assert_eq!(out.matches("set $mode_").count(), 1);
    }

    #[test]
    fn empty_description_is_omitted() {
        for desc in [None, Some(String::new())] {
            let out = foo_mode().with_description(desc).render().unwrap();
            assert!(!out.contains("set $mode_"));
        }
    }

    #[test]
    fn mode_shortcut_is_last_line() {
        let out = foo_mode()
            .with_shortcut(Some("$mod+f".into()))
            .render()
            .unwrap();
        assert_eq!(out.lines().last(), Some("bind $mod+f mode \"$mode_foo\""));
        assert_eq!(out.matches("mode \"$mode_foo\"\n").count(), 1);
    }

    #[test]
    fn empty_shortcut_is_omitted() {
        for shortcut in [None, Some(String::new())] {
            let out = foo_mode().with_shortcut(shortcut).render().unwrap();
            assert!(out.ends_with("}\n"));
        }
    }

    #[test]
    fn escape_binding_appears_once() {
        let variants = [
            foo_mode(),
            foo_mode().with_description(Some("d".into())),
            foo_mode().with_shortcut(Some("x".into())),
            ModeSpec::new("empty", vec![]),
        ];
        for mode in variants {
            assert_eq!(mode.render().unwrap().matches(ESCAPE_BINDING).count(), 1);
        }
    }

    #[test]
    fn commands_keep_input_order_without_escape() {
        let mode = ModeSpec::new(
            "ws",
            vec![
                CommandSpec::new("3", "workspace {}", vec!["3".into()]),
                CommandSpec::new("1", "workspace {}", vec!["1".into()]),
            ],
        )
        .with_escape_after_each_command(false);
        let out = mode.render().unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "    bind 3 workspace 3");
        assert_eq!(lines[2], "    bind 1 workspace 1");
    }

    #[test]
    fn substitute_var_simple() {
        let var = VariableSpec::new("foo", "bar");
        let out = substitute_var(&var, "This is {{VAR_foo}} and more!");
        assert_eq!(out, "This is bar and more!");
    }

    #[test]
    fn substitute_unknown_var_is_identity() {
        let var = VariableSpec::new("AAAAA", "BBBBB");
        assert_eq!(substitute_var(&var, "foo"), "foo");
    }

    #[test]
    fn engine_replaces_every_occurrence() {
        let engine = TemplateEngine::new("{{VAR_x}} {{VAR_x}}");
        let out = engine
            .render(&[], &[VariableSpec::new("x", "1")])
            .unwrap();
        assert_eq!(out, "1 1");
    }

    #[test]
    fn engine_is_repeatable() {
        let engine = TemplateEngine::new("a\n{{MODE_foo}}b {{VAR_v}}\n");
        let modes = [foo_mode()];
        let vars = [VariableSpec::new("v", "c")];
        let first = engine.render(&modes, &vars).unwrap();
        let second = engine.render(&modes, &vars).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.original(), "a\n{{MODE_foo}}b {{VAR_v}}\n");

        let other = engine.render(&[], &[VariableSpec::new("v", "z")]).unwrap();
        assert_eq!(other, "a\n{{MODE_foo}}b z\n");
    }

    #[test]
    fn vars_expand_inside_mode_text() {
        let mode = foo_mode().with_description(Some("{{VAR_desc}}".into()));
        let engine = TemplateEngine::new("{{MODE_foo}}");
        let out = engine
            .render(&[mode], &[VariableSpec::new("desc", "Foo mode")])
            .unwrap();
        assert!(out.starts_with("set $mode_foo Foo mode\n"));
    }

    #[test]
    fn mode_markers_in_var_values_stay_literal() {
        let engine = TemplateEngine::new("{{VAR_v}}");
        let out = engine
            .render(&[foo_mode()], &[VariableSpec::new("v", "{{MODE_foo}}")])
            .unwrap();
        assert_eq!(out, "{{MODE_foo}}");
    }

    #[test]
    fn format_error_surfaces_from_render() {
        let bad = ModeSpec::new("bad", vec![CommandSpec::new("a", "{} {}", vec!["x".into()])]);
        let engine = TemplateEngine::new("{{MODE_bad}}");
        assert!(matches!(
            engine.render(&[bad], &[]),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn load_and_render_document() {
        let yaml = r#"
modes:
  - name: launch
    command_prefix: "exec "
    description: "Launch: (f)irefox (t)erminal"
    shortcut: "$mod+d"
    commands:
      - shortcut: f
        command: firefox
      - shortcut: t
        template: "exec {} -e {}"
        template_args: [alacritty, htop]
vars:
  - name: font
    value: "pango:monospace 10"
"#;
        let doc = load_from_str(yaml, None).unwrap();
        let engine = TemplateEngine::new("font {{VAR_font}}\n{{MODE_launch}}");
        let out = doc.render(&engine).unwrap();
        let expected = "font pango:monospace 10\n\
set $mode_launch Launch: (f)irefox (t)erminal\n\
mode \"$mode_launch\" {\n\
\x20   bind f exec firefox; mode \"default\"\n\
\x20   bind t exec alacritty -e htop; mode \"default\"\n\
\x20   bind Escape mode \"default\"\n\
}\n\
bind $mod+d mode \"$mode_launch\"\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn duplicate_mode_names_inject_first_block_only() {
        let yaml = r#"
modes:
  - name: foo
    command_template: "exec {}"
    commands:
      - shortcut: a
        template_args: [first]
  - name: foo
    command_template: "exec {}"
    commands:
      - shortcut: b
        template_args: [second]
"#;
        let doc = load_from_str(yaml, None).unwrap();
        assert_eq!(doc.modes.len(), 2);

        let out = doc.render(&TemplateEngine::new("{{MODE_foo}}")).unwrap();
        assert_eq!(out, doc.modes[0].render().unwrap());
        assert!(out.contains("bind a exec first"));
        assert!(!out.contains("second"));
    }

    #[test]
    fn empty_document_is_empty() {
        let doc = load_from_str("", None).unwrap();
        assert!(doc.modes.is_empty() && doc.vars.is_empty());
        let doc = load_from_str("vars: []\n", None).unwrap();
        assert!(doc.modes.is_empty());
    }

    #[test]
    fn unknown_top_level_key_is_parse_error() {
        let err = load_from_str("mode: []\n", None).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
