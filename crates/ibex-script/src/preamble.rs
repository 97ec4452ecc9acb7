//! Fixed instructions and practice block that opens every generated script.

use ibex_core::{DEFAULT_FILLER_PREFIX, DEFAULT_TEST_PREFIX};

/// Instructions, consent forms and practice trials placed before the
/// experimental items. Only the two shuffle prefixes vary; everything else
/// is fixed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble<'a> {
    /// Condition prefix identifying test items.
    pub test_prefix: &'a str,
    /// Condition prefix identifying filler items.
    pub filler_prefix: &'a str,
}

impl Default for Preamble<'static> {
    fn default() -> Self {
        Self {
            test_prefix: DEFAULT_TEST_PREFIX,
            filler_prefix: DEFAULT_FILLER_PREFIX,
        }
    }
}

impl Preamble<'_> {
    /// Renders the block. The output ends inside the open `items` array,
    /// so trial fragments can be appended directly.
    pub fn render(&self) -> String {
        let test_prefix = self.test_prefix;
        let filler_prefix = self.filler_prefix;
        format!(
            r#"var shuffleSequence = seq("consent", "setcounter", "intro", "prepractice", "practice", "getReady", sepWith("sep", rshuffle(startsWith("{test_prefix}"),startsWith("{filler_prefix}"))),"exit");

var showProgressBar = true
var practiceItemTypes = ["practice"];

var counterOverride = 2;

// Just to avoid typing AcceptabilityJudgment over and over.
var q = "AcceptabilityJudgment"
var defaults = [
    Separator, {{ transfer: 500, normalMessage: "Please wait one moment." }},
    AcceptabilityJudgment, {{as: ["1", "2", "3", "4", "5", "6", "7"], presentAsScale: true, instructions: "Use a number key or click on a box.", leftComment: "(Very unnatural)", rightComment: "(Very natural)" }}
];

var items = [

// Increment counter
//["setcounter", "__SetCounter__", {{ }}],

["sep", Separator, {{ }}],

["consent", "Form", {{consentRequired: true, html: {{include: "workerID_test.html"}}}}],

["consent", "Form", {{consentRequired: true, html: {{include: "consent.html" }}}} ],

["consent", "SSForm", {{consentRequired: true, html: {{include: "intro.html" }}}} ],

["iriTest", "Form", {{consentRequired: true, html: {{include: "IRI_survey.html"}}}}],

["exit", "Form", {{consentRequired: false, html: {{include: "debrief.html" }}}} ],

["exit", "Form", {{consentRequired: false, html: {{include: "exit.html" }}}} ],


["intro", "Message", {{consentRequired: false,
                    html: ["div",
                            ["p", "Welcome.  In this experiment, you'll be reading some English sentences: one context paragraph, and one target sentence. For the sentences you see, please give your rating of whether the TARGET SENTENCE of each pair seems like a natural English sentence or not. If it sounds natural, give it a high rating (6 or 7). If you think that the sentence does not sound like a natural sentence of English, then you should give it a low rating (1 or 2). You do NOT need to rate the context paragraphs."],
                            ["p", "You should judge the target sentences not according to school grammar, but instead according to your intuitions about what counts as natural English. For example, 'school' grammar tells us that we should not end sentences with a preposition. However in modern English, a sentence with a preposition at the end such as 'That's the man I'm talking about' is perfectly natural. You might rate that sentence a 5 or a 6."]
                          ]}}],

["prepractice", "Message", {{consentRequired: false,
                    html: ["div",
                            ["p", "Note that in this questionnaire you are NOT being asked to judge the plausibility of the meaning of the sentence; you are simply being asked to judge whether the target sentence sounds natural or not. The target sentence below describes an unlikely situation, although it has the form of a very natural English sentence. Given the proper circumstances (maybe in a fairy tale), this could be a very reasonable sentence, and so you might want to rate it a 6 or a 7."],
                            ["p", "Context: John wanted to know what Eric saw."],
                            ["p", "Target: He said that the purple elephants are climbing up the trees."]
                          ]}}],

["prepractice", "Message", {{consentRequired: false,
                    html: ["div",
                            ["p", "Remember, you're being asked to judge the naturalness of the target sentences. However, sometimes the sentences we use can be quite long and complicated, and still remain natural. Here's an example of a long, complicated sentence that is nonetheless natural. You might rate it a 4 or a 5."],
                            ["p", "The president was asked who the CIA thought the nation was at risk from when he appeared at a press conference on TV."]
                          ]}}],

["prepractice", "Message", {{consentRequired: false,
                    html: ["div",
                            ["p", "Likewise, short sentences can be completely unnatural, even if you understand what the sentence might mean. Here's an example of a short and simple sentence that is highly unnatural. You might rate it a 1 or a 2."],
                            ["p", "The cats the trees climbed."]
                          ]}}],

["prepractice", "Message", {{consentRequired: false,
                    html: ["div",
                            ["p", "Remember that each sentence is different, and you may very well feel differently towards two sentences which might seem superficially similar, so it is important that you judge each sentence on its own merits and not compare it to other sentences that you may have read."],
                            ["p", "It is very important to read the context sentence *before* reading the target sentence!"],
                            ["p", "Lastly, there will be a lot of variation in the sentences you read, and they won't all neatly fall into 'good' and 'bad' cases. So try to use the entire 1-7 rating scale, and give careful consideration to how natural each sentence sounds to you!"],
                            ["p", "Let's try some practice."]
                          ]}}],
                          
["practice", q, {{s: ["div", ["p", "Context: It was Christmas time, and everyone was really excited."],
                ["p", "Target: The kids decorated the ornaments onto the tree."]]}}],
["practice", q, {{s: ["div", ["p", "Context: John asked me yesterday who all was going to be coming over."], 
                ["p", "Target: I know that Bill and Mary were planning on attending the party last night."]]}}],
["practice", q, {{s: ["div", ["p", "Context: Mary is usually fairly skeptical of public officials."], 
                ["p", "Target: Which politician did she believe the scientist and?"]]}}],
["practice", q, {{s: ["div", ["p", "Context: Unfortunately, Susy was a little bit out of the social loop."], 
                ["p", "Target: John doubted that she knew anything of what went on after work."]]}}],

["getReady", "Message", {{consentRequired: false,
                        html:  ["div",
                            ["p", "That's it for the practice. Here's a quick reminder of what to do:"],
                            ["p", " (1) Read each context/target pair carefully so that you understand what it means."],
                            ["p", " (2) Rate the naturalness of the target sentence only."],
                            ["p", " (3) Use your gut intuitions, not school grammar!"],
                            ["p", "Click below when you're ready to begin."]
                          ]}}], 
"#
        )
    }
}
