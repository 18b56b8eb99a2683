//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use voxdom::a11y::Query;
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    fn name_of(html: &str, id: &str) -> String {
        let dom = parse(html);
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        query.name(&element(&dom, id))
    }

    #[test]
    fn labelled_by_multiple_ids() {
        assert_eq!(
            name_of(
                "<span id=a>Billing</span><span id=b>Address</span>\
                 <input id=i aria-labelledby='a b'>",
                "i"
            ),
            "Billing Address"
        );
    }

    #[test]
    fn labelled_by_wins_over_aria_label() {
        assert_eq!(
            name_of(
                "<span id=a>From id</span><button id=b aria-labelledby=a aria-label=Attr>Text</button>",
                "b"
            ),
            "From id"
        );
    }

    #[test]
    fn image_title_from_file_name() {
        assert_eq!(name_of("<img id=i src='/img/cat.png?w=2'>", "i"), "cat.png Image");
        assert_eq!(
            name_of("<img id=i src='/img/a-very-long-file-name.png'>", "i"),
            "Image"
        );
        assert_eq!(name_of("<img id=i src='data:image/png;base64,AAAA'>", "i"), "Image");
        assert_eq!(name_of("<img id=i alt='' title=Logo src=x.png>", "i"), "Logo");
    }

    #[test]
    fn fieldset_legends() {
        assert_eq!(
            name_of(
                "<fieldset id=f><legend>Shipping</legend><input></fieldset>",
                "f"
            ),
            "Shipping"
        );
    }

    #[test]
    fn label_for_and_implicit_label() {
        assert_eq!(
            name_of("<label for=e>Email</label><input id=e>", "e"),
            "Email"
        );
        assert_eq!(
            name_of("<label>Phone <input id=p></label>", "p"),
            "Phone"
        );
    }

    #[test]
    fn input_buttons() {
        assert_eq!(name_of("<input id=s type=submit>", "s"), "Submit");
        assert_eq!(name_of("<input id=r type=reset>", "r"), "Reset");
        assert_eq!(name_of("<input id=b type=button value=Send>", "b"), "Send");
    }

    #[test]
    fn title_when_text_is_empty() {
        assert_eq!(name_of("<a id=a href=x title=Home></a>", "a"), "Home");
        assert_eq!(name_of("<a id=a href=x title=Home>Start</a>", "a"), "Start");
    }

    #[test]
    fn children_joined_around_spans() {
        assert_eq!(
            name_of("<a id=a href=x>Read <b>more</b></a>", "a"),
            "Read more"
        );
        assert_eq!(
            name_of("<a id=a href=x>foo<span>bar</span></a>", "a"),
            "foobar"
        );
    }

    #[test]
    fn ordered_list_prefix() {
        let dom = parse(
            "<ol><li id=one>First</li><li>Second</li></ol>\
             <ol style='list-style-type: upper-latin'><li>x</li><li>y</li><li id=c>Third</li></ol>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        let first_text = voxdom::parsers::html::dom::first_child(&element(&dom, "one")).unwrap();
        let third_text = voxdom::parsers::html::dom::first_child(&element(&dom, "c")).unwrap();

        assert_eq!(query.name(&first_text), "1. First");
        assert_eq!(query.name(&third_text), "C. Third");
    }

    #[test]
    fn values() {
        let dom = parse(
            "<input id=t value=hello><input id=p type=password value=abc>\
             <select id=s><option>a</option><option selected>b</option></select>\
             <select id=m multiple><option selected>a</option><option>b</option><option selected>c</option></select>",
        );
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_value(&element(&dom, "t")), "hello");
        assert_eq!(query.get_value(&element(&dom, "p")), "dot dot dot ");
        assert_eq!(query.get_value(&element(&dom, "s")), "b");
        assert_eq!(query.get_value(&element(&dom, "m")), "a to c");
    }

    #[test]
    fn control_label_heuristics() {
        let dom = parse("<div><span>City</span></div><div><input id=i></div>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);

        assert_eq!(query.get_control_label_heuristics(&element(&dom, "i")), "City");
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use voxdom::a11y::Query;
    use voxdom::core::VoxOptions;

    use crate::common::{element, parse};

    fn name_of(html: &str, id: &str) -> String {
        let dom = parse(html);
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        query.name(&element(&dom, id))
    }

    #[test]
    fn dangling_labelled_by() {
        assert_eq!(name_of("<div id=d aria-labelledby=missing></div>", "d"), "");
    }

    #[test]
    fn labelled_by_cycle() {
        assert_eq!(
            name_of(
                "<span id=a aria-labelledby=b></span><span id=b aria-labelledby=a></span>",
                "a"
            ),
            ""
        );
    }

    #[test]
    fn composite_children_are_state() {
        assert_eq!(
            name_of(
                "<div id=l role=listbox><div role=option>One</div></div>",
                "l"
            ),
            ""
        );
    }

    #[test]
    fn hidden_children_skipped() {
        assert_eq!(
            name_of(
                "<button id=b>Save<span style='display:none'> draft</span></button>",
                "b"
            ),
            "Save"
        );
    }

    #[test]
    fn label_with_for_is_not_implicit() {
        assert_eq!(name_of("<label for=other>Phone <input id=p></label>", "p"), "");
    }

    #[test]
    fn unordered_list_has_no_prefix() {
        let dom = parse("<ul><li id=one>First</li></ul><ol style='list-style-type:none'><li id=two>Second</li></ol>");
        let options = VoxOptions::default();
        let query = Query::new(&dom.document, &options);
        let one = voxdom::parsers::html::dom::first_child(&element(&dom, "one")).unwrap();
        let two = voxdom::parsers::html::dom::first_child(&element(&dom, "two")).unwrap();

        assert_eq!(query.name(&one), "First");
        assert_eq!(query.name(&two), "Second");
    }
}
