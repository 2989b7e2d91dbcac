//! z-expansion coefficients of the strange sector, `B_s(*) -> D_s(*)`.
//!
//! Each entry is `[a_0, a_1, a_2]` as a polynomial in `alpha_s / pi`, the
//! power-correction parameters and the zero-recoil Isgur-Wise inputs.

use super::{BglFormFactor, SectorInputs};

#[rustfmt::skip]
pub(super) fn coefficients(ff: BglFormFactor, x: &SectorInputs) -> [f64; 3] {
    let (a_s, eb, ec) = (x.alpha_s, x.eps_b, x.eps_c);
    let ec2 = ec * ec;
    let (xi1, xi2) = (x.xi_p, x.xi_pp);
    let (chi2, chi2p) = (x.chi2, x.chi2_p);
    let (chi3p, chi3pp) = (x.chi3_p, x.chi3_pp);
    let (eta, etap, etapp) = (x.eta, x.eta_p, x.eta_pp);
    let [l1, l2, l3, l4, l5, l6] = x.l;
    let [l1p, l2p, l3p, l4p, l5p, l6p] = x.l_p;

    match ff {
        BglFormFactor::V1 => [
            0.004853927809740896 + 0.0018073507175946574 * a_s - 0.0022489124823136626 * eb
                + 0.0022489124823136626 * ec + 0.004497824964627325 * eb * eta
                - 0.004497824964627325 * ec * eta + (0.004853927809740896 * l1
                - 0.0022489124823136626 * l4) * ec2,
            0.04085920220485458 - 0.018930806855320836 * eb - 0.15532568991170867 * chi2 * eb
                + 0.465977069735126 * chi3p * eb + 0.018930806855320836 * ec
                - 0.15532568991170867 * chi2 * ec + 0.465977069735126 * chi3p * ec
                + 0.03786161371064167 * eb * eta - 0.03786161371064167 * ec * eta
                + 0.0359825997170186 * eb * etap - 0.0359825997170186 * ec * etap
                + a_s * (0.01923252020198305 + 0.014458805740757258 * xi1)
                + 0.03883142247792717 * xi1 - 0.0179912998585093 * eb * xi1
                + 0.0179912998585093 * ec * xi1 + 0.0359825997170186 * eb * eta * xi1
                - 0.0359825997170186 * ec * eta * xi1 + (0.03883142247792717 * l1p
                - 0.018930806855320836 * l4 - 0.0179912998585093 * l4p + l1 * (0.04085920220485458
                + 0.03883142247792717 * xi1) - 0.0179912998585093 * l4 * xi1) * ec2,
            0.11341891835977361 - 0.05254903476684066 * eb - 1.618145850378764 * chi2 * eb
                - 1.2426055192936694 * chi2p * eb + 4.854437551136292 * chi3p * eb
                + 1.863908278940504 * chi3pp * eb + 0.05254903476684066 * ec
                - 1.618145850378764 * chi2 * ec - 1.2426055192936694 * chi2p * ec
                + 4.854437551136292 * chi3p * ec + 1.863908278940504 * chi3pp * ec
                + 0.10509806953368132 * eb * eta - 0.10509806953368132 * ec * eta
                + 0.3748581091191706 * eb * etap - 0.3748581091191706 * ec * etap
                + 0.1439303988680744 * eb * etapp - 0.1439303988680744 * ec * etapp
                + 0.404536462594691 * xi1 - 0.1874290545595853 * eb * xi1
                - 1.2426055192936694 * chi2 * eb * xi1 + 3.727816557881008 * chi3p * eb * xi1
                + 0.1874290545595853 * ec * xi1 - 1.2426055192936694 * chi2 * ec * xi1
                + 3.727816557881008 * chi3p * ec * xi1 + 0.3748581091191706 * eb * eta * xi1
                - 0.3748581091191706 * ec * eta * xi1 + 0.2878607977361488 * eb * etap * xi1
                - 0.2878607977361488 * ec * etap * xi1 + a_s * (0.03101685877692137
                + 0.18277777309737894 * xi1 + 0.05783522296302903 * xi2) + 0.15532568991170867 * xi2
                - 0.0719651994340372 * eb * xi2 + 0.0719651994340372 * ec * xi2
                + 0.1439303988680744 * eb * eta * xi2 - 0.1439303988680744 * ec * eta * xi2
                + (0.32687361763883666 * l1p - 0.05254903476684066 * l4 - 0.1514464548425667 * l4p
                + 0.31065137982341734 * l1p * xi1 - 0.1874290545595853 * l4 * xi1
                - 0.1439303988680744 * l4p * xi1 + l1 * (0.11341891835977361
                + 0.404536462594691 * xi1 + 0.15532568991170867 * xi2)
                - 0.0719651994340372 * l4 * xi2) * ec2,
        ],
        BglFormFactor::S1 => [
            0.027568784109983837 + 0.00691165359571278 * a_s + 0.027568784109983837 * l1 * ec2,
            0.1991754644782667 + 0.13815036774277073 * a_s - 0.23801173042451831 * eb
                - 0.8822010915194828 * chi2 * eb + 2.6466032745584482 * chi3p * eb
                + 0.23801173042451831 * ec - 0.8822010915194828 * chi2 * ec
                + 2.6466032745584482 * chi3p * ec + 0.47602346084903663 * eb * eta
                - 0.47602346084903663 * ec * eta + 0.2205502728798707 * xi1
                + 0.05529322876570224 * a_s * xi1 + 0.1991754644782667 * l1 * ec2
                + 0.2205502728798707 * l1p * ec2 - 0.23801173042451831 * l4 * ec2
                + 0.2205502728798707 * l1 * xi1 * ec2,
            0.5502247632998395 + 0.35019441270807145 * a_s - 1.2435335848826854 * eb
                - 8.138017046343501 * chi2 * eb - 7.057608732155861 * chi2p * eb
                + 24.414051139030498 * chi3p * eb + 10.586413098233795 * chi3pp * eb
                + 1.2435335848826854 * ec - 8.138017046343501 * chi2 * ec
                - 7.057608732155861 * chi2p * ec + 24.414051139030498 * chi3p * ec
                + 10.586413098233795 * chi3pp * ec + 2.487067169765371 * eb * eta
                - 2.487067169765371 * ec * eta + 3.808187686792293 * eb * etap
                - 3.808187686792293 * ec * etap + 2.0345042615858753 * xi1
                + 1.2157893994735705 * a_s * xi1 - 1.9040938433961465 * eb * xi1
                - 7.057608732155861 * chi2 * eb * xi1 + 21.17282619646759 * chi3p * eb * xi1
                + 1.9040938433961465 * ec * xi1 - 7.057608732155861 * chi2 * ec * xi1
                + 21.17282619646759 * chi3p * ec * xi1 + 3.808187686792293 * eb * eta * xi1
                - 3.808187686792293 * ec * eta * xi1 + 0.8822010915194827 * xi2
                + 0.22117291506280895 * a_s * xi2 + 0.5502247632998395 * l1 * ec2
                + 1.5934037158261338 * l1p * ec2 - 1.2435335848826854 * l4 * ec2
                - 1.9040938433961465 * l4p * ec2 + 2.0345042615858753 * l1 * xi1 * ec2
                + 1.7644021830389653 * l1p * xi1 * ec2 - 1.9040938433961465 * l4 * xi1 * ec2
                + 0.8822010915194827 * l1 * xi2 * ec2,
        ],
        BglFormFactor::FT => [
            0.00966678746772539 + 0.016120405609235954 * a_s + 0.00966678746772539 * eb
                + 0.00966678746772539 * ec - 0.01933357493545078 * eb * eta
                - 0.01933357493545078 * ec * eta + 0.00966678746772539 * l1 * ec2
                - 0.00966678746772539 * l4 * ec2,
            0.0904562210942245 + 0.1734159116203609 * a_s + 0.0904562210942245 * eb
                - 0.30933719896721246 * chi2 * eb + 0.9280115969016375 * chi3p * eb
                + 0.0904562210942245 * ec - 0.30933719896721246 * chi2 * ec
                + 0.9280115969016375 * chi3p * ec - 0.180912442188449 * eb * eta
                - 0.180912442188449 * ec * eta - 0.15466859948360623 * eb * etap
                - 0.15466859948360623 * ec * etap + 0.07733429974180311 * xi1
                + 0.12896324487388763 * a_s * xi1 + 0.07733429974180311 * eb * xi1
                + 0.07733429974180311 * ec * xi1 - 0.15466859948360623 * eb * eta * xi1
                - 0.15466859948360623 * ec * eta * xi1 + 0.07733429974180311 * l1p * ec2
                + 0.0904562210942245 * l1 * ec2 - 0.07733429974180311 * l4p * ec2
                - 0.0904562210942245 * l4 * ec2 + 0.07733429974180311 * l1 * xi1 * ec2
                - 0.07733429974180311 * l4 * xi1 * ec2,
            0.3114246240345193 + 0.6475515597600012 * a_s + 0.3114246240345193 * eb
                - 3.5132734729496087 * chi2 * eb - 2.4746975917376997 * chi2p * eb
                + 10.539820418848826 * chi3p * eb + 3.71204638760655 * chi3pp * eb
                + 0.3114246240345193 * ec - 3.5132734729496087 * chi2 * ec
                - 2.4746975917376997 * chi2p * ec + 10.539820418848826 * chi3p * ec
                + 3.71204638760655 * chi3pp * ec - 0.6228492480690386 * eb * eta
                - 0.6228492480690386 * ec * eta - 1.7566367364748043 * eb * etap
                - 1.7566367364748043 * ec * etap - 0.6186743979344249 * eb * etapp
                - 0.6186743979344249 * ec * etapp + 0.8783183682374022 * xi1
                + 1.6452537827106624 * a_s * xi1 + 0.8783183682374022 * eb * xi1
                - 2.4746975917376997 * chi2 * eb * xi1 + 7.4240927752131 * chi3p * eb * xi1
                + 0.8783183682374022 * ec * xi1 - 2.4746975917376997 * chi2 * ec * xi1
                + 7.4240927752131 * chi3p * ec * xi1 - 1.7566367364748043 * eb * eta * xi1
                - 1.7566367364748043 * ec * eta * xi1 - 1.2373487958688498 * eb * etap * xi1
                - 1.2373487958688498 * ec * etap * xi1 + 0.30933719896721246 * xi2
                + 0.5158529794955505 * a_s * xi2 + 0.30933719896721246 * eb * xi2
                + 0.30933719896721246 * ec * xi2 - 0.6186743979344249 * eb * eta * xi2
                - 0.6186743979344249 * ec * eta * xi2 + 0.3114246240345193 * l1 * ec2
                + 0.723649768753796 * l1p * ec2 - 0.3114246240345193 * l4 * ec2
                - 0.723649768753796 * l4p * ec2 + 0.8783183682374022 * l1 * xi1 * ec2
                + 0.6186743979344249 * l1p * xi1 * ec2 - 0.8783183682374022 * l4 * xi1 * ec2
                - 0.6186743979344249 * l4p * xi1 * ec2 + 0.30933719896721246 * l1 * xi2 * ec2
                - 0.30933719896721246 * l4 * xi2 * ec2,
        ],
        BglFormFactor::A1 => [
            0.0039029629021226243 - 0.0016234798992337527 * a_s + 0.0039029629021226243 * l2 * ec2,
            0.045389619854771975 + 0.0011297414860574153 * a_s + 0.015611851608490495 * eb
                - 0.12489481286792396 * chi2 * eb + 0.3746844386037719 * chi3p * eb
                + 0.015611851608490495 * ec - 0.12489481286792396 * chi3p * ec
                - 0.03122370321698099 * eb * eta + 0.03122370321698099 * xi1
                - 0.012987839193870022 * a_s * xi1 + 0.045389619854771975 * l2 * ec2
                + 0.03122370321698099 * l2p * ec2 - 0.015611851608490495 * l5 * ec2
                + 0.03122370321698099 * l2 * xi1 * ec2,
            0.21375918823072088 + 0.09214542757833816 * a_s + 0.15033477620210686 * eb
                - 1.7022574610885512 * chi2 * eb - 0.9991585029433917 * chi2p * eb
                + 5.106772383265654 * chi3p * eb + 1.4987377544150877 * chi3pp * eb
                + 0.15033477620210686 * ec - 1.7022574610885512 * chi3p * ec
                - 0.49957925147169585 * chi3pp * ec - 0.3006695524042137 * eb * eta
                - 0.24978962573584793 * eb * etap + 0.4255643652721378 * xi1
                - 0.01693774649928072 * a_s * xi1 + 0.12489481286792396 * eb * xi1
                - 0.9991585029433917 * chi2 * eb * xi1 + 2.9974755088301754 * chi3p * eb * xi1
                + 0.12489481286792396 * ec * xi1 - 0.9991585029433917 * chi3p * ec * xi1
                - 0.24978962573584793 * eb * eta * xi1 + 0.12489481286792396 * xi2
                - 0.05195135677548009 * a_s * xi2 + 0.21375918823072088 * l2 * ec2
                + 0.3631169588381758 * l2p * ec2 - 0.15033477620210686 * l5 * ec2
                - 0.12489481286792396 * l5p * ec2 + 0.4255643652721378 * l2 * xi1 * ec2
                + 0.24978962573584793 * l2p * xi1 * ec2 - 0.12489481286792396 * l5 * xi1 * ec2
                + 0.12489481286792396 * l2 * xi2 * ec2,
        ],
        BglFormFactor::A5 => [
            0.002527938212054363 - 0.0010515234135438955 * a_s + 0.002527938212054363 * l2 * ec2,
            0.024475416515784738 - 0.023236265467587044 * eb - 0.08089402278573964 * chi2 * eb
                + 0.2426820683572189 * chi3p * eb + 0.023236265467587044 * ec
                + 0.08089402278573964 * chi2 * ec - 0.08089402278573964 * chi3p * ec
                + 0.04647253093517409 * eb * eta + 0.04647253093517409 * ec * eta
                + a_s * (0.004718133656994875 - 0.008412187308351166 * xi1)
                + 0.02022350569643491 * xi1 + (0.02022350569643491 * l2p + 0.02022350569643491 * l3
                + 0.023236265467587044 * l5 - 0.04647253093517409 * l6 + l2 * (0.024475416515784738
                + 0.02022350569643491 * xi1)) * ec2,
            0.08599311230540732 - 0.17850024445887427 * eb - 0.9450013740765909 * chi2 * eb
                - 0.6471521822859172 * chi2p * eb + 2.8350041222297726 * chi3p * eb
                + 0.9707282734288758 * chi3pp * eb + 0.1785002444588743 * ec
                + 0.9450013740765909 * chi2 * ec + 0.6471521822859172 * chi2p * ec
                - 0.9450013740765909 * chi3p * ec - 0.3235760911429586 * chi3pp * ec
                + 0.35700048891774855 * eb * eta + 0.3570004889177486 * ec * eta
                + 0.3717802474813927 * eb * etap + 0.3717802474813927 * ec * etap
                + 0.23625034351914773 * xi1 - 0.18589012374069636 * eb * xi1
                - 0.6471521822859172 * chi2 * eb * xi1 + 1.9414565468577516 * chi3p * eb * xi1
                + 0.18589012374069636 * ec * xi1 + 0.6471521822859172 * chi2 * ec * xi1
                - 0.6471521822859172 * chi3p * ec * xi1 + 0.3717802474813927 * eb * eta * xi1
                + 0.3717802474813927 * ec * eta * xi1 + a_s * (0.0719079842270774
                + 0.02092069463925666 * xi1 - 0.03364874923340466 * xi2) + 0.08089402278573965 * xi2
                + (0.1958033321262779 * l2p + 0.23625034351914773 * l3 + 0.1617880455714793 * l3p
                + 0.17850024445887427 * l5 + 0.18589012374069636 * l5p - 0.5428906126584448 * l6
                - 0.3717802474813927 * l6p + 0.1617880455714793 * l2p * xi1
                + 0.1617880455714793 * l3 * xi1 + 0.18589012374069636 * l5 * xi1
                - 0.3717802474813927 * l6 * xi1 + l2 * (0.08599311230540732
                + 0.23625034351914773 * xi1 + 0.08089402278573965 * xi2)) * ec2,
        ],
        BglFormFactor::V4 => [
            0.004684646612240956 + 0.004297565736635373 * a_s + 0.004684646612240956 * eb
                + 0.004684646612240956 * ec - 0.009369293224481911 * eb * eta
                + 0.004684646612240956 * l2 * ec2 - 0.004684646612240956 * l5 * ec2,
            0.04345453602144384 + 0.04722512441781111 * a_s + 0.04345453602144384 * eb
                - 0.14990869159171058 * chi2 * eb + 0.4497260747751317 * chi3p * eb
                + 0.04345453602144384 * ec - 0.14990869159171058 * chi3p * ec
                - 0.08690907204288768 * eb * eta - 0.07495434579585529 * eb * etap
                + 0.037477172897927645 * xi1 + 0.034380525893082985 * a_s * xi1
                + 0.037477172897927645 * eb * xi1 + 0.037477172897927645 * ec * xi1
                - 0.07495434579585529 * eb * eta * xi1 + 0.04345453602144384 * l2 * ec2
                + 0.037477172897927645 * l2p * ec2 - 0.04345453602144384 * l5 * ec2
                - 0.037477172897927645 * l5p * ec2 + 0.037477172897927645 * l2 * xi1 * ec2
                - 0.037477172897927645 * l5 * xi1 * ec2,
            0.13494178999195733 + 0.15007087537821776 * a_s + 0.13494178999195733 * eb
                - 1.6903625358696244 * chi2 * eb - 1.1992695327336846 * chi2p * eb
                + 5.071087607608872 * chi3p * eb + 1.7989042991005268 * chi3pp * eb
                + 0.13494178999195733 * ec - 1.6903625358696244 * chi3p * ec
                - 0.5996347663668423 * chi3pp * ec - 0.26988357998391466 * eb * eta
                - 0.8451812679348122 * eb * etap - 0.29981738318342116 * eb * etapp
                + 0.4225906339674061 * xi1 + 0.44656204712865494 * a_s * xi1
                + 0.4225906339674061 * eb * xi1 - 1.1992695327336846 * chi2 * eb * xi1
                + 3.5978085982010537 * chi3p * eb * xi1 + 0.4225906339674061 * ec * xi1
                - 1.1992695327336846 * chi3p * ec * xi1 - 0.8451812679348122 * eb * eta * xi1
                - 0.5996347663668423 * eb * etap * xi1 + 0.14990869159171058 * xi2
                + 0.13752210357233197 * a_s * xi2 + 0.14990869159171058 * eb * xi2
                + 0.14990869159171058 * ec * xi2 - 0.29981738318342116 * eb * eta * xi2
                + 0.13494178999195733 * l2 * ec2 + 0.34763628817155073 * l2p * ec2
                - 0.13494178999195733 * l5 * ec2 - 0.34763628817155073 * l5p * ec2
                + 0.4225906339674061 * l2 * xi1 * ec2 + 0.29981738318342116 * l2p * xi1 * ec2
                - 0.4225906339674061 * l5 * xi1 * ec2 - 0.29981738318342116 * l5p * xi1 * ec2
                + 0.14990869159171058 * l2 * xi2 * ec2 - 0.14990869159171058 * l5 * xi2 * ec2,
        ],
        BglFormFactor::P1 => [
            0.017614604136229357 - 0.0012894515619258611 * a_s - 0.007665367904889766 * eb
                + 0.007665367904889766 * ec + 0.015330735809779531 * eb * eta
                + 0.015330735809779531 * ec * eta + 0.017614604136229357 * l2 * ec2
                + 0.007665367904889766 * l5 * ec2 - 0.015330735809779531 * l6 * ec2,
            0.17385254509323594 - 0.027729362113336223 * a_s - 0.07565561559229919 * eb
                - 0.5636673323593394 * chi2 * eb + 1.6910019970780181 * chi3p * eb
                + 0.07565561559229919 * ec + 0.5636673323593394 * chi2 * ec
                - 0.5636673323593394 * chi3p * ec + 0.15131123118459838 * eb * eta
                + 0.15131123118459838 * ec * eta + 0.12264588647823625 * eb * etap
                + 0.12264588647823625 * ec * etap + 0.14091683308983485 * xi1
                - 0.01031561249540689 * a_s * xi1 - 0.061322943239118126 * eb * xi1
                + 0.061322943239118126 * ec * xi1 + 0.12264588647823625 * eb * eta * xi1
                + 0.12264588647823625 * ec * eta * xi1 + 0.17385254509323594 * l2 * ec2
                + 0.14091683308983485 * l2p * ec2 + 0.14091683308983485 * l3 * ec2
                + 0.07565561559229919 * l5 * ec2 + 0.061322943239118126 * l5p * ec2
                - 0.21263417442371652 * l6 * ec2 - 0.12264588647823625 * l6p * ec2
                + 0.14091683308983485 * l2 * xi1 * ec2 + 0.061322943239118126 * l5 * xi1 * ec2
                - 0.12264588647823625 * l6 * xi1 * ec2,
            0.6199338182961519 - 0.37274031827421483 * a_s - 0.269777325517593 * eb
                - 6.69061610770223 * chi2 * eb - 4.509338658874715 * chi2p * eb
                + 20.071848323106686 * chi3p * eb + 6.7640079883120725 * chi3pp * eb
                + 0.269777325517593 * ec + 6.690616107702229 * chi2 * ec
                + 4.509338658874715 * chi2p * ec - 6.69061610770223 * chi3p * ec
                - 2.2546693294373576 * chi3pp * ec + 0.539554651035186 * eb * eta
                + 0.539554651035186 * ec * eta + 1.45578162243326 * eb * etap
                + 1.4557816224332596 * ec * etap + 0.49058354591294506 * eb * etapp
                + 0.49058354591294506 * ec * etapp + 1.6726540269255574 * xi1
                - 0.24246612189750352 * a_s * xi1 - 0.72789081121663 * eb * xi1
                - 4.509338658874715 * chi2 * eb * xi1 + 13.528015976624145 * chi3p * eb * xi1
                + 0.7278908112166298 * ec * xi1 + 4.509338658874715 * chi2 * ec * xi1
                - 4.509338658874715 * chi3p * ec * xi1 + 1.45578162243326 * eb * eta * xi1
                + 1.4557816224332598 * ec * eta * xi1 + 0.9811670918258901 * eb * etap * xi1
                + 0.9811670918258901 * ec * etap * xi1 + 0.5636673323593394 * xi2
                - 0.04126244998162756 * a_s * xi2 - 0.24529177295647253 * eb * xi2
                + 0.24529177295647253 * ec * xi2 + 0.49058354591294506 * eb * eta * xi2
                + 0.49058354591294506 * ec * eta * xi2 + 0.6199338182961519 * l2 * ec2
                + 1.3908203607458876 * l2p * ec2 + 1.6726540269255572 * l3 * ec2
                + 1.1273346647186788 * l3p * ec2 + 0.269777325517593 * l5 * ec2
                + 0.6052449247383936 * l5p * ec2 - 1.2674454622518159 * l6 * ec2
                - 1.7010733953897321 * l6p * ec2 + 1.6726540269255574 * l2 * xi1 * ec2
                + 1.1273346647186788 * l2p * xi1 * ec2 + 1.1273346647186788 * l3 * xi1 * ec2
                + 0.72789081121663 * l5 * xi1 * ec2 + 0.49058354591294506 * l5p * xi1 * ec2
                - 1.9463651683462044 * l6 * xi1 * ec2 - 0.9811670918258901 * l6p * xi1 * ec2
                + 0.5636673323593394 * l2 * xi2 * ec2 + 0.24529177295647253 * l5 * xi2 * ec2
                - 0.49058354591294506 * l6 * xi2 * ec2,
        ],
        BglFormFactor::T1 => [
            0.005303371401576171 + 0.002984624789048728 * a_s - 0.0023078743419353625 * eb
                + 0.0023078743419353625 * ec + 0.004615748683870725 * eb * eta
                + 0.005303371401576171 * l2 * ec2 - 0.0023078743419353625 * l5 * ec2,
            0.049193794682977326 + 0.031688272203984034 * a_s - 0.021407721227583158 * eb
                - 0.1697078848504375 * chi2 * eb + 0.5091236545513125 * chi3p * eb
                + 0.021407721227583158 * ec - 0.1697078848504375 * chi3p * ec
                + 0.042815442455166317 * eb * eta + 0.0369259894709658 * eb * etap
                + 0.042426971212609375 * xi1 + 0.023876998312389822 * a_s * xi1
                - 0.0184629947354829 * eb * xi1 + 0.0184629947354829 * ec * xi1
                + 0.0369259894709658 * eb * eta * xi1 + 0.049193794682977326 * l2 * ec2
                + 0.042426971212609375 * l2p * ec2 - 0.021407721227583158 * l5 * ec2
                - 0.0184629947354829 * l5p * ec2 + 0.042426971212609375 * l2 * xi1 * ec2
                - 0.0184629947354829 * l5 * xi1 * ec2,
            0.152764229440672 + 0.07358933273759395 * a_s - 0.0664785885798743 * eb
                - 1.9136171995561493 * chi2 * eb - 1.3576630788034998 * chi2p * eb
                + 5.740851598668448 * chi3p * eb + 2.03649461820525 * chi3pp * eb
                + 0.0664785885798743 * ec - 1.9136171995561493 * chi3p * ec
                - 0.6788315394017499 * chi3pp * ec + 0.1329571771597486 * eb * eta
                + 0.41637551858326205 * eb * etap + 0.1477039578838632 * eb * etapp
                + 0.4784042998890373 * xi1 + 0.30126017425665197 * a_s * xi1
                - 0.20818775929163102 * eb * xi1 - 1.3576630788034998 * chi2 * eb * xi1
                + 4.0729892364105 * chi3p * eb * xi1 + 0.20818775929163102 * ec * xi1
                - 1.3576630788034998 * chi3p * ec * xi1 + 0.41637551858326205 * eb * eta * xi1
                + 0.2954079157677264 * eb * etap * xi1 + 0.16970788485043747 * xi2
                + 0.09550799324955929 * a_s * xi2 - 0.0738519789419316 * eb * xi2
                + 0.0738519789419316 * ec * xi2 + 0.1477039578838632 * eb * eta * xi2
                + 0.152764229440672 * l2 * ec2 + 0.3935503574638186 * l2p * ec2
                - 0.0664785885798743 * l5 * ec2 - 0.17126176982066524 * l5p * ec2
                + 0.4784042998890373 * l2 * xi1 * ec2 + 0.33941576970087495 * l2p * xi1 * ec2
                - 0.20818775929163102 * l5 * xi1 * ec2 - 0.1477039578838632 * l5p * xi1 * ec2
                + 0.16970788485043747 * l2 * xi2 * ec2 - 0.0738519789419316 * l5 * xi2 * ec2,
        ],
        BglFormFactor::T2 => [
            0.00106406613984606 + 0.0003556896380373649 * a_s + 0.00106406613984606 * l2 * ec2,
            0.011366320304480485 + 0.009527969427653715 * a_s - 0.009780667574323585 * eb
                - 0.034050116475073916 * chi2 * eb + 0.10215034942522176 * chi3p * eb
                + 0.009780667574323585 * ec - 0.034050116475073916 * chi3p * ec
                + 0.01956133514864717 * eb * eta + 0.008512529118768479 * xi1
                + 0.002845517104298919 * a_s * xi1 + 0.011366320304480485 * l2 * ec2
                + 0.008512529118768479 * l2p * ec2 - 0.009780667574323585 * l5 * ec2
                + 0.008512529118768479 * l2 * xi1 * ec2,
            0.04649869228477457 + 0.061016848241349474 * a_s - 0.08491544150876175 * eb
                - 0.43182248269352336 * chi2 * eb - 0.2724009318005914 * chi2p * eb
                + 1.2954674480805701 * chi3p * eb + 0.4086013977008871 * chi3pp * eb
                + 0.08491544150876175 * ec - 0.43182248269352336 * chi3p * ec
                - 0.1362004659002957 * chi3pp * ec + 0.1698308830175235 * eb * eta
                + 0.15649068118917736 * eb * etap + 0.10795562067338084 * xi1
                + 0.08191478962982757 * a_s * xi1 - 0.07824534059458868 * eb * xi1
                - 0.2724009318005914 * chi2 * eb * xi1 + 0.8172027954017742 * chi3p * eb * xi1
                + 0.07824534059458868 * ec * xi1 - 0.2724009318005914 * chi3p * ec * xi1
                + 0.15649068118917736 * eb * eta * xi1 + 0.03405011647507392 * xi2
                + 0.011382068417195676 * a_s * xi2 + 0.04649869228477457 * l2 * ec2
                + 0.09093056243584388 * l2p * ec2 - 0.08491544150876175 * l5 * ec2
                - 0.07824534059458868 * l5p * ec2 + 0.10795562067338084 * l2 * xi1 * ec2
                + 0.06810023295014785 * l2p * xi1 * ec2 - 0.07824534059458868 * l5 * xi1 * ec2
                + 0.03405011647507392 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T23 => [
            0.0032856900136407955 + 0.0010983207226422545 * a_s + 0.0032856900136407955 * l2 * ec2,
            0.03821102696074016 + 0.032126984281562174 * a_s + 0.013142760054563206 * eb
                - 0.10514208043650546 * chi2 * eb + 0.31542624130951635 * chi3p * eb
                + 0.01314276005456317 * ec + 0.10514208043650554 * chi2 * ec
                - 0.10514208043650546 * chi3p * ec - 0.026285520109126412 * eb * eta
                + 0.02628552010912638 * ec * eta + 0.026285520109126364 * xi1
                + 0.008786565781138036 * a_s * xi1 + 0.03821102696074016 * l2 * ec2
                + 0.026285520109126364 * l2p * ec2 + 0.026285520109126385 * l3 * ec2
                + 0.013142760054563206 * l5 * ec2 - 0.026285520109126385 * l6 * ec2
                + 0.026285520109126364 * l2 * xi1 * ec2,
            0.1799521152793105 + 0.24300691099939695 * a_s + 0.12655858773383452 * eb
                - 1.4330370236166963 * chi2 * eb - 0.8411366434920439 * chi2p * eb
                + 4.299111070850089 * chi3p * eb + 1.2617049652380659 * chi3pp * eb
                + 0.12655858773383424 * ec + 1.433037023616697 * chi2 * ec
                + 0.8411366434920442 * chi2p * ec - 1.4330370236166963 * chi3p * ec
                - 0.42056832174602193 * chi3pp * ec - 0.25311717546766904 * eb * eta
                + 0.2531171754676687 * ec * eta - 0.21028416087301116 * eb * etap
                + 0.21028416087301105 * ec * etap + 0.35825925590417407 * xi1
                + 0.27458900581477363 * a_s * xi1 + 0.10514208043650558 * eb * xi1
                - 0.8411366434920439 * chi2 * eb * xi1 + 2.5234099304761317 * chi3p * eb * xi1
                + 0.10514208043650543 * ec * xi1 + 0.8411366434920442 * chi2 * ec * xi1
                - 0.8411366434920439 * chi3p * ec * xi1 - 0.21028416087301116 * eb * eta * xi1
                + 0.21028416087301105 * ec * eta * xi1 + 0.10514208043650548 * xi2
                + 0.03514626312455215 * a_s * xi2 + 0.1799521152793105 * l2 * ec2
                + 0.3056882156859214 * l2p * ec2 + 0.35825925590417423 * l3 * ec2
                + 0.21028416087301105 * l3p * ec2 + 0.12655858773383452 * l5 * ec2
                + 0.10514208043650558 * l5p * ec2 - 0.35825925590417423 * l6 * ec2
                - 0.21028416087301105 * l6p * ec2 + 0.35825925590417407 * l2 * xi1 * ec2
                + 0.21028416087301097 * l2p * xi1 * ec2 + 0.21028416087301105 * l3 * xi1 * ec2
                + 0.10514208043650558 * l5 * xi1 * ec2 - 0.21028416087301105 * l6 * xi1 * ec2
                + 0.10514208043650548 * l2 * xi2 * ec2,
        ],
        BglFormFactor::P2 => [
            0.03294794420017363 - 0.0015899447001142385 * a_s - 0.01538157363810894 * eb
                + 0.01538157363810894 * ec - 0.03076314727621788 * eb * eta
                - 0.03076314727621788 * ec * eta + 0.03294794420017363 * l1 * ec2
                - 0.01538157363810894 * l4 * ec2,
            0.27812193901117405 - 0.040298078998178166 * a_s - 0.12983975750606846 * eb
                + 1.054334214405556 * chi2 * eb - 1.054334214405556 * chi3p * eb
                + 0.12983975750606844 * ec - 1.054334214405556 * chi2 * ec
                + 3.1630026432166685 * chi3p * ec - 0.2596795150121369 * eb * eta
                - 0.2596795150121369 * ec * eta - 0.24610517820974304 * eb * etap
                - 0.24610517820974304 * ec * etap + 0.263583553601389 * xi1
                - 0.012719557600913908 * a_s * xi1 - 0.12305258910487152 * eb * xi1
                + 0.12305258910487152 * ec * xi1 - 0.24610517820974304 * eb * eta * xi1
                - 0.24610517820974304 * ec * eta * xi1 + 0.27812193901117405 * l1 * ec2
                + 0.263583553601389 * l1p * ec2 - 0.12983975750606844 * l4 * ec2
                - 0.12305258910487152 * l4p * ec2 + 0.263583553601389 * l1 * xi1 * ec2
                - 0.12305258910487152 * l4 * xi1 * ec2,
            0.8002854055840344 - 0.600240705338798 * a_s - 0.3736090125292201 * eb
                + 11.008570477168684 * chi2 * eb + 8.43467371524445 * chi2p * eb
                - 11.008570477168682 * chi3p * eb - 4.217336857622223 * chi3pp * eb
                + 0.37360901252921974 * ec - 11.008570477168682 * chi2 * ec
                - 8.434673715244447 * chi2p * ec + 33.02571143150605 * chi3p * ec
                + 12.652010572866674 * chi3pp * ec - 0.7472180250584398 * eb * eta
                - 0.7472180250584395 * ec * eta - 2.5696464765165814 * eb * etap
                - 2.569646476516581 * ec * etap - 0.9844207128389721 * eb * etapp
                - 0.9844207128389721 * ec * etapp + 2.7521426192921705 * xi1
                - 0.3478237471872532 * a_s * xi1 - 1.2848232382582907 * eb * xi1
                + 8.43467371524445 * chi2 * eb * xi1 - 8.434673715244447 * chi3p * eb * xi1
                + 1.2848232382582905 * ec * xi1 - 8.434673715244447 * chi2 * ec * xi1
                + 25.304021145733348 * chi3p * ec * xi1 - 2.5696464765165814 * eb * eta * xi1
                - 2.569646476516581 * ec * eta * xi1 - 1.9688414256779443 * eb * etap * xi1
                - 1.9688414256779443 * ec * etap * xi1 + 1.0543342144055559 * xi2
                - 0.050878230403655675 * a_s * xi2 - 0.4922103564194861 * eb * xi2
                + 0.4922103564194861 * ec * xi2 - 0.9844207128389721 * eb * eta * xi2
                - 0.9844207128389721 * ec * eta * xi2 + 0.8002854055840344 * l1 * ec2
                + 2.224975512089393 * l1p * ec2 - 0.37360901252921974 * l4 * ec2
                - 1.0387180600485475 * l4p * ec2 + 2.7521426192921705 * l1 * xi1 * ec2
                + 2.1086684288111117 * l1p * xi1 * ec2 - 1.2848232382582905 * l4 * xi1 * ec2
                - 0.9844207128389721 * l4p * xi1 * ec2 + 1.0543342144055559 * l1 * xi2 * ec2
                - 0.4922103564194861 * l4 * xi2 * ec2,
        ],
        BglFormFactor::V5 => [
            0.005283133663761428 + 0.004846601268945023 * a_s + 0.005283133663761428 * eb
                + 0.005283133663761428 * ec - 0.010566267327522857 * ec * eta
                + 0.005283133663761428 * l1 * ec2 - 0.005283133663761428 * l4 * ec2,
            0.046629963052817115 + 0.05107859492650357 * a_s + 0.046629963052817115 * eb
                - 0.1690602772403657 * chi3p * eb + 0.046629963052817115 * ec
                - 0.1690602772403657 * chi2 * ec + 0.5071808317210972 * chi3p * ec
                - 0.09325992610563423 * ec * eta - 0.08453013862018285 * ec * etap
                + 0.04226506931009143 * xi1 + 0.038772810151560186 * a_s * xi1
                + 0.04226506931009143 * eb * xi1 + 0.04226506931009143 * ec * xi1
                - 0.08453013862018285 * ec * eta * xi1 + 0.046629963052817115 * l1 * ec2
                + 0.04226506931009143 * l1p * ec2 - 0.046629963052817115 * l4 * ec2
                - 0.04226506931009143 * l4p * ec2 + 0.04226506931009143 * l1 * xi1 * ec2
                - 0.04226506931009143 * l4 * xi1 * ec2,
            0.13687352617980045 + 0.15146661888422702 * a_s + 0.13687352617980045 * eb
                - 1.8302793721708792 * chi3p * eb - 0.6762411089614629 * chi3pp * eb
                + 0.13687352617980045 * ec - 1.8302793721708792 * chi2 * ec
                - 1.3524822179229259 * chi2p * ec + 5.490838116512637 * chi3p * ec
                + 2.0287233268843887 * chi3pp * ec - 0.2737470523596009 * ec * eta
                - 0.9151396860854396 * ec * etap - 0.33812055448073147 * ec * etapp
                + 0.4575698430427198 * xi1 + 0.4861743797151489 * a_s * xi1
                + 0.4575698430427198 * eb * xi1 - 1.3524822179229259 * chi3p * eb * xi1
                + 0.4575698430427198 * ec * xi1 - 1.3524822179229259 * chi2 * ec * xi1
                + 4.0574466537687774 * chi3p * ec * xi1 - 0.9151396860854396 * ec * eta * xi1
                - 0.6762411089614629 * ec * etap * xi1 + 0.16906027724036574 * xi2
                + 0.15509124060624077 * a_s * xi2 + 0.16906027724036574 * eb * xi2
                + 0.16906027724036574 * ec * xi2 - 0.33812055448073147 * ec * eta * xi2
                + 0.13687352617980045 * l1 * ec2 + 0.3730397044225369 * l1p * ec2
                - 0.13687352617980045 * l4 * ec2 - 0.3730397044225369 * l4p * ec2
                + 0.4575698430427198 * l1 * xi1 * ec2 + 0.33812055448073147 * l1p * xi1 * ec2
                - 0.4575698430427198 * l4 * xi1 * ec2 - 0.33812055448073147 * l4p * xi1 * ec2
                + 0.16906027724036574 * l1 * xi2 * ec2 - 0.16906027724036574 * l4 * xi2 * ec2,
        ],
        BglFormFactor::A2 => [
            0.00503545648285162 - 0.0020945529302699613 * a_s + 0.00503545648285162 * l1 * ec2,
            0.05481409325271715 + 0.0030156952718291374 * a_s + 0.02014182593140648 * eb
                - 0.16113460745125183 * chi3p * eb + 0.02014182593140648 * ec
                - 0.16113460745125183 * chi2 * ec + 0.4834038223537555 * chi3p * ec
                - 0.04028365186281296 * ec * eta + 0.04028365186281296 * xi1
                - 0.016756423442159687 * a_s * xi1 + 0.05481409325271715 * l1 * ec2
                + 0.04028365186281296 * l1p * ec2 - 0.02014182593140648 * l4 * ec2
                + 0.04028365186281296 * l1 * xi1 * ec2,
            0.24131157329136588 + 0.11401702767769033 * a_s + 0.17897272114805565 * eb
                - 2.076320198989453 * chi3p * eb - 0.6445384298050074 * chi3pp * eb
                + 0.17897272114805565 * ec - 2.076320198989453 * chi2 * ec
                - 1.2890768596100148 * chi2p * ec + 6.228960596968358 * chi3p * ec
                + 1.9336152894150223 * chi3pp * ec - 0.3579454422961113 * ec * eta
                - 0.3222692149025037 * ec * etap + 0.5190800497473632 * xi1
                - 0.009387284709686276 * a_s * xi1 + 0.16113460745125185 * eb * xi1
                - 1.2890768596100148 * chi3p * eb * xi1 + 0.16113460745125185 * ec * xi1
                - 1.2890768596100148 * chi2 * ec * xi1 + 3.8672305788300445 * chi3p * ec * xi1
                - 0.3222692149025037 * ec * eta * xi1 + 0.16113460745125185 * xi2
                - 0.06702569376863876 * a_s * xi2 + 0.24131157329136588 * l1 * ec2
                + 0.43851274602173723 * l1p * ec2 - 0.17897272114805565 * l4 * ec2
                - 0.16113460745125185 * l4p * ec2 + 0.5190800497473632 * l1 * xi1 * ec2
                + 0.3222692149025037 * l1p * xi1 * ec2 - 0.16113460745125185 * l4 * xi1 * ec2
                + 0.16113460745125185 * l1 * xi2 * ec2,
        ],
        BglFormFactor::A6 => [
            0.0035285573463436095 - 0.0014677418332536486 * a_s + 0.0035285573463436095 * l1 * ec2,
            0.031570021713464555 + 0.005931223319652669 * a_s - 0.03023324226499239 * eb
                + 0.1129138350829955 * chi2 * eb - 0.1129138350829955 * chi3p * eb
                + 0.03023324226499239 * ec - 0.1129138350829955 * chi2 * ec
                + 0.33874150524898655 * chi3p * ec - 0.06046648452998478 * eb * eta
                - 0.06046648452998478 * ec * eta + 0.028228458770748876 * xi1
                - 0.01174193466602919 * a_s * xi1 + 0.031570021713464555 * l1 * ec2
                + 0.028228458770748876 * l1p * ec2 - 0.03023324226499239 * l4 * ec2
                + 0.028228458770748876 * l1 * xi1 * ec2,
            0.1012710007502295 + 0.07834959986071738 * a_s - 0.21003049797287487 * eb
                + 1.2360683649968567 * chi2 * eb + 0.903310680663964 * chi2p * eb
                - 1.2360683649968567 * chi3p * eb - 0.451655340331982 * chi3pp * eb
                + 0.21003049797287487 * ec - 1.2360683649968567 * chi2 * ec
                - 0.903310680663964 * chi2p * ec + 3.708205094990571 * chi3p * ec
                + 1.354966020995946 * chi3pp * ec - 0.42006099594574975 * eb * eta
                - 0.42006099594574975 * ec * eta - 0.4837318762398783 * eb * etap
                - 0.4837318762398782 * ec * etap + 0.30901709124921417 * xi1
                + 0.02396591722516295 * a_s * xi1 - 0.24186593811993914 * eb * xi1
                + 0.903310680663964 * chi2 * eb * xi1 - 0.903310680663964 * chi3p * eb * xi1
                + 0.2418659381199391 * ec * xi1 - 0.903310680663964 * chi2 * ec * xi1
                + 2.709932041991892 * chi3p * ec * xi1 - 0.4837318762398783 * eb * eta * xi1
                - 0.4837318762398782 * ec * eta * xi1 + 0.1129138350829955 * xi2
                - 0.046967738664116764 * a_s * xi2 + 0.1012710007502295 * l1 * ec2
                + 0.25256017370771644 * l1p * ec2 - 0.21003049797287487 * l4 * ec2
                - 0.2418659381199391 * l4p * ec2 + 0.30901709124921417 * l1 * xi1 * ec2
                + 0.225827670165991 * l1p * xi1 * ec2 - 0.2418659381199391 * l4 * xi1 * ec2
                + 0.1129138350829955 * l1 * xi2 * ec2,
        ],
        BglFormFactor::T1Bar => [
            0.006279445375704966 + 0.003638375183292366 * a_s - 0.0029315258902368664 * eb
                + 0.0029315258902368664 * ec - 0.005863051780473733 * ec * eta
                + 0.006279445375704966 * l1 * ec2 - 0.0029315258902368664 * l4 * ec2,
            0.055423603583944527 + 0.03694318529992362 * a_s - 0.02587421644993889 * eb
                - 0.20094225202255891 * chi3p * eb + 0.02587421644993889 * ec
                - 0.20094225202255891 * chi2 * ec + 0.6028267560676768 * chi3p * ec
                - 0.05174843289987778 * ec * eta - 0.046904414243789855 * ec * etap
                + 0.05023556300563973 * xi1 + 0.02910700146633893 * a_s * xi1
                - 0.023452207121894927 * eb * xi1 + 0.023452207121894927 * ec * xi1
                - 0.046904414243789855 * ec * eta * xi1 + 0.055423603583944527 * l1 * ec2
                + 0.05023556300563973 * l1p * ec2 - 0.02587421644993889 * l4 * ec2
                - 0.023452207121894927 * l4p * ec2 + 0.05023556300563973 * l1 * xi1 * ec2
                - 0.023452207121894927 * l4 * xi1 * ec2,
            0.16268561155695807 + 0.07824669591820689 * a_s - 0.07594891805149258 * eb
                - 2.1754398187313426 * chi3p * eb - 0.8037690080902358 * chi3pp * eb
                + 0.07594891805149258 * ec - 2.1754398187313426 * chi2 * ec
                - 1.6075380161804715 * chi2p * ec + 6.526319456194027 * chi3p * ec
                + 2.4113070242707066 * chi3pp * ec - 0.15189783610298516 * ec * eta
                - 0.507796291686602 * ec * etap - 0.18761765697515942 * ec * etapp
                + 0.5438599546828357 * xi1 + 0.3537594853320668 * a_s * xi1
                - 0.253898145843301 * eb * xi1 - 1.6075380161804715 * chi3p * eb * xi1
                + 0.253898145843301 * ec * xi1 - 1.6075380161804715 * chi2 * ec * xi1
                + 4.822614048541413 * chi3p * ec * xi1 - 0.507796291686602 * ec * eta * xi1
                - 0.37523531395031884 * ec * etap * xi1 + 0.20094225202255894 * xi2
                + 0.11642800586535572 * a_s * xi2 - 0.09380882848757971 * eb * xi2
                + 0.09380882848757971 * ec * xi2 - 0.18761765697515942 * ec * eta * xi2
                + 0.16268561155695807 * l1 * ec2 + 0.4433888286715562 * l1p * ec2
                - 0.07594891805149258 * l4 * ec2 - 0.20699373159951115 * l4p * ec2
                + 0.5438599546828357 * l1 * xi1 * ec2 + 0.4018845040451179 * l1p * xi1 * ec2
                - 0.253898145843301 * l4 * xi1 * ec2 - 0.18761765697515942 * l4p * xi1 * ec2
                + 0.20094225202255894 * l1 * xi2 * ec2 - 0.09380882848757971 * l4 * xi2 * ec2,
        ],
        BglFormFactor::T2Bar => [
            -0.0015316603889868848 - 0.0005119942350893066 * a_s - 0.0015316603889868848 * l1 * ec2,
            -0.01523543419560388 - 0.012837094303612273 * a_s + 0.013123510563295124 * eb
                + 0.049013132447580314 * chi3p * eb - 0.013123510563295124 * ec
                + 0.049013132447580314 * chi2 * ec - 0.14703939734274096 * chi3p * ec
                + 0.026247021126590248 * ec * eta - 0.012253283111895079 * xi1
                - 0.004095953880714453 * a_s * xi1 - 0.01523543419560388 * l1 * ec2
                - 0.012253283111895079 * l1p * ec2 + 0.013123510563295124 * l4 * ec2
                - 0.012253283111895079 * l1 * xi1 * ec2,
            -0.05766303680766183 - 0.0742514207574954 * a_s + 0.10429260961664973 * eb
                + 0.5855601591544847 * chi3p * eb + 0.19605252979032126 * chi3pp * eb
                - 0.10429260961664973 * ec + 0.5855601591544847 * chi2 * ec
                + 0.3921050595806425 * chi2p * ec - 1.7566804774634543 * chi3p * ec
                - 0.5881575893709637 * chi3pp * ec + 0.20858521923329945 * ec * eta
                + 0.20997616901272195 * ec * etap - 0.14639003978862117 * xi1
                - 0.1108886621903271 * a_s * xi1 + 0.10498808450636098 * eb * xi1
                + 0.3921050595806425 * chi3p * eb * xi1 - 0.10498808450636098 * ec * xi1
                + 0.3921050595806425 * chi2 * ec * xi1 - 1.1763151787419275 * chi3p * ec * xi1
                + 0.20997616901272195 * ec * eta * xi1 - 0.049013132447580314 * xi2
                - 0.01638381552285781 * a_s * xi2 - 0.05766303680766183 * l1 * ec2
                - 0.12188347356483102 * l1p * ec2 + 0.10429260961664973 * l4 * ec2
                + 0.10498808450636098 * l4p * ec2 - 0.14639003978862117 * l1 * xi1 * ec2
                - 0.09802626489516063 * l1p * xi1 * ec2 + 0.10498808450636098 * l4 * xi1 * ec2
                - 0.049013132447580314 * l1 * xi2 * ec2,
        ],
        BglFormFactor::T23Bar => [
            -0.004371536851026707 - 0.0014612910814299973 * a_s - 0.004371536851026707 * l1 * ec2,
            -0.047586912810369 - 0.04165717237084313 * a_s - 0.01748614740410682 * eb
                - 0.13988917923285463 * chi2 * eb + 0.13988917923285463 * chi3p * eb
                - 0.01748614740410684 * ec + 0.13988917923285463 * chi2 * ec
                - 0.41966753769856396 * chi3p * ec - 0.03497229480821366 * eb * eta
                + 0.03497229480821368 * ec * eta - 0.03497229480821366 * xi1
                - 0.011690328651439978 * a_s * xi1 - 0.047586912810369 * l1 * ec2
                - 0.03497229480821366 * l1p * ec2 + 0.017486147404106835 * l4 * ec2
                - 0.03497229480821366 * l1 * xi1 * ec2,
            -0.2094948966027084 - 0.2941557148897957 * a_s - 0.1553753564332622 * eb
                - 1.8025595683975166 * chi2 * eb - 1.1191134338628366 * chi2p * eb
                + 1.802559568397517 * chi3p * eb + 0.5595567169314184 * chi3pp * eb
                - 0.1553753564332624 * ec + 1.802559568397517 * chi2 * ec
                + 1.1191134338628368 * chi2p * ec - 5.407678705192552 * chi3p * ec
                - 1.6786701507942554 * chi3pp * ec - 0.31075071286652456 * eb * eta
                + 0.3107507128665248 * ec * eta - 0.27977835846570914 * eb * etap
                + 0.27977835846570936 * ec * etap - 0.45063989209937927 * xi1
                - 0.35663803626962504 * a_s * xi1 - 0.13988917923285446 * eb * xi1
                - 1.1191134338628366 * chi2 * eb * xi1 + 1.1191134338628368 * chi3p * eb * xi1
                - 0.13988917923285468 * ec * xi1 + 1.1191134338628368 * chi2 * ec * xi1
                - 3.357340301588511 * chi3p * ec * xi1 - 0.27977835846570914 * eb * eta * xi1
                + 0.27977835846570936 * ec * eta * xi1 - 0.1398891792328546 * xi2
                - 0.0467613146057599 * a_s * xi2 - 0.2094948966027084 * l1 * ec2
                - 0.38069530248295197 * l1p * ec2 + 0.1553753564332624 * l4 * ec2
                + 0.13988917923285468 * l4p * ec2 - 0.45063989209937927 * l1 * xi1 * ec2
                - 0.2797783584657092 * l1p * xi1 * ec2 + 0.13988917923285468 * l4 * xi1 * ec2
                - 0.1398891792328546 * l1 * xi2 * ec2,
        ],
        BglFormFactor::S2 => [
            0.02706009741680484 + 0.006784122900199494 * a_s + 0.02706009741680484 * l2 * ec2,
            0.2189743421429717 + 0.14491175989743943 * a_s - 0.24666697664657322 * eb
                - 0.8659231173377548 * chi3p * eb + 0.24666697664657322 * ec
                - 0.8659231173377548 * chi3p * ec + 0.2164807793344387 * xi1
                + 0.05427298320159596 * a_s * xi1 + 0.2189743421429717 * l2 * ec2
                + 0.2164807793344387 * l2p * ec2 - 0.24666697664657322 * l5 * ec2
                + 0.2164807793344387 * l2 * xi1 * ec2,
            0.6697186753961397 + 0.46925290063727393 * a_s - 1.502731992354025 * eb
                - 8.739025183250604 * chi3p * eb - 3.4636924693510194 * chi3pp * eb
                + 1.502731992354025 * ec - 8.739025183250604 * chi3p * ec
                - 3.4636924693510194 * chi3pp * ec + 2.184756295812651 * xi1
                + 1.2678400455827072 * a_s * xi1 - 1.9733358131725856 * eb * xi1
                - 6.927384938702039 * chi3p * eb * xi1 + 1.9733358131725856 * ec * xi1
                - 6.927384938702039 * chi3p * ec * xi1 + 0.8659231173377548 * xi2
                + 0.2170919328063838 * a_s * xi2 + 0.6697186753961397 * l2 * ec2
                + 1.7517947371437732 * l2p * ec2 - 1.502731992354025 * l5 * ec2
                - 1.9733358131725856 * l5p * ec2 + 2.184756295812651 * l2 * xi1 * ec2
                + 1.7318462346755097 * l2p * xi1 * ec2 - 1.9733358131725856 * l5 * xi1 * ec2
                + 0.8659231173377548 * l2 * xi2 * ec2,
        ],
        BglFormFactor::S3 => [
            0.01913437838299128 + 0.00479709930713401 * a_s + 0.01913437838299128 * l2 * ec2,
            0.15483824223515844 + 0.1024680880971562 * a_s - 0.17441989188157567 * eb
                + 0.6123001082557211 * chi2 * eb - 0.6123001082557209 * chi3p * eb
                + 0.17441989188157567 * ec + 0.6123001082557211 * chi2 * ec
                - 0.6123001082557209 * chi3p * ec - 0.34883978376315133 * eb * eta
                + 0.34883978376315133 * ec * eta + 0.15307502706393022 * xi1
                + 0.03837679445707208 * a_s * xi1 + 0.15483824223515844 * l2 * ec2
                + 0.15307502706393022 * l2p * ec2 + 0.15307502706393028 * l3 * ec2
                + 0.17441989188157567 * l5 * ec2 - 0.34883978376315133 * l6 * ec2
                + 0.15307502706393022 * l2 * xi1 * ec2,
            0.4735626168598823 + 0.3318119081320737 * a_s - 1.0625919820995022 * eb
                + 6.179423968036516 * chi2 * eb + 4.898400866045769 * chi2p * eb
                - 6.179423968036511 * chi3p * eb - 2.449200433022884 * chi3pp * eb
                + 1.0625919820995022 * ec + 6.179423968036516 * chi2 * ec
                + 4.898400866045769 * chi2p * ec - 6.179423968036511 * chi3p * ec
                - 2.449200433022884 * chi3pp * ec - 2.1251839641990045 * eb * eta
                + 2.1251839641990045 * ec * eta - 2.7907182701052107 * eb * etap
                + 2.7907182701052107 * ec * etap + 1.5448559920091278 * xi1
                + 0.8964982936913937 * a_s * xi1 - 1.3953591350526053 * eb * xi1
                + 4.898400866045769 * chi2 * eb * xi1 - 4.898400866045768 * chi3p * eb * xi1
                + 1.3953591350526053 * ec * xi1 + 4.898400866045769 * chi2 * ec * xi1
                - 4.898400866045768 * chi3p * ec * xi1 - 2.7907182701052107 * eb * eta * xi1
                + 2.7907182701052107 * ec * eta * xi1 + 0.612300108255721 * xi2
                + 0.15350717782828832 * a_s * xi2 + 0.4735626168598823 * l2 * ec2
                + 1.2387059378812677 * l2p * ec2 + 1.544855992009129 * l3 * ec2
                + 1.2246002165114422 * l3p * ec2 + 1.0625919820995022 * l5 * ec2
                + 1.3953591350526053 * l5p * ec2 - 3.52054309925161 * l6 * ec2
                - 2.7907182701052107 * l6p * ec2 + 1.5448559920091278 * l2 * xi1 * ec2
                + 1.224600216511442 * l2p * xi1 * ec2 + 1.2246002165114422 * l3 * xi1 * ec2
                + 1.3953591350526053 * l5 * xi1 * ec2 - 2.7907182701052107 * l6 * xi1 * ec2
                + 0.612300108255721 * l2 * xi2 * ec2,
        ],
        BglFormFactor::P3 => [
            0.02181039634593078 - 0.0015340565139036527 * a_s - 0.009570660132031263 * eb
                + 0.009570660132031263 * ec + 0.02181039634593078 * l2 * ec2
                - 0.009570660132031263 * l5 * ec2,
            0.22407038485915534 - 0.03424640011175238 * a_s - 0.09832473766761804 * eb
                - 0.697932683069785 * chi3p * eb + 0.09832473766761804 * ec
                - 0.697932683069785 * chi3p * ec + 0.17448317076744624 * xi1
                - 0.012272452111229222 * a_s * xi1 - 0.07656528105625009 * eb * xi1
                + 0.07656528105625009 * ec * xi1 + 0.22407038485915534 * l2 * ec2
                + 0.17448317076744624 * l2p * ec2 - 0.09832473766761804 * l5 * ec2
                - 0.07656528105625009 * l5p * ec2 + 0.17448317076744624 * l2 * xi1 * ec2
                - 0.07656528105625009 * l5 * xi1 * ec2,
            0.8334754182339632 - 0.4704868585026707 * a_s - 0.36573888111887276 * eb
                - 8.56611768163254 * chi3p * eb - 2.79173073227914 * chi3pp * eb
                + 0.36573888111887276 * ec - 8.56611768163254 * chi3p * ec
                - 2.79173073227914 * chi3pp * ec + 2.141529420408135 * xi1
                - 0.2985161051164776 * a_s * xi1 - 0.9397284634534445 * eb * xi1
                - 5.58346146455828 * chi3p * eb * xi1 + 0.9397284634534445 * ec * xi1
                - 5.58346146455828 * chi3p * ec * xi1 + 0.697932683069785 * xi2
                - 0.04908980844491689 * a_s * xi2 - 0.30626112422500035 * eb * xi2
                + 0.30626112422500035 * ec * xi2 + 0.8334754182339632 * l2 * ec2
                + 1.7925630788732423 * l2p * ec2 - 0.36573888111887276 * l5 * ec2
                - 0.7865979013409443 * l5p * ec2 + 2.141529420408135 * l2 * xi1 * ec2
                + 1.39586536613957 * l2p * xi1 * ec2 - 0.9397284634534445 * l5 * xi1 * ec2
                - 0.6125222484500007 * l5p * xi1 * ec2 + 0.697932683069785 * l2 * xi2 * ec2
                - 0.30626112422500035 * l5 * xi2 * ec2,
        ],
        BglFormFactor::V2 => [
            0.004609867550019866 + 0.0016868153974270927 * a_s - 0.0020228644576260183 * eb
                + 0.0020228644576260183 * ec + (0.004609867550019866 * l2
                - 0.0020228644576260183 * l5) * ec2,
            0.04453083033743383 - 0.01954065555696522 * eb - 0.1475157616006357 * chi3p * eb
                + 0.01954065555696522 * ec - 0.1475157616006357 * chi3p * ec
                + a_s * (0.020136736299265223 + 0.013494523179416741 * xi1)
                + 0.036878940400158926 * xi1 - 0.01618291566100815 * eb * xi1
                + 0.01618291566100815 * ec * xi1 + (0.036878940400158926 * l2p
                - 0.01954065555696522 * l5 - 0.01618291566100815 * l5p + l2 * (0.04453083033743383
                + 0.036878940400158926 * xi1) - 0.01618291566100815 * l5 * xi1) * ec2,
            0.14479527883566448 - 0.06353788259869902 * eb - 1.720018093999154 * chi3p * eb
                - 0.5900630464025428 * chi3pp * eb + 0.06353788259869902 * ec
                - 1.720018093999154 * chi3p * ec - 0.5900630464025428 * chi3pp * ec
                + 0.4300045234997885 * xi1 - 0.18869107577773805 * eb * xi1
                - 1.1801260928050856 * chi3p * eb * xi1 + 0.18869107577773805 * ec * xi1
                - 1.1801260928050856 * chi3p * ec * xi1 + a_s * (0.04740742180967111
                + 0.18808293675295523 * xi1 + 0.053978092717666966 * xi2) + 0.1475157616006357 * xi2
                - 0.06473166264403259 * eb * xi2 + 0.06473166264403259 * ec * xi2
                + (0.3562466426994706 * l2p - 0.06353788259869902 * l5 - 0.15632524445572177 * l5p
                + 0.2950315232012714 * l2p * xi1 - 0.18869107577773805 * l5 * xi1
                - 0.12946332528806517 * l5p * xi1 + l2 * (0.14479527883566448
                + 0.4300045234997885 * xi1 + 0.1475157616006357 * xi2)
                - 0.06473166264403259 * l5 * xi2) * ec2,
        ],
        BglFormFactor::V3 => [
            0.0032596686049908637 + 0.0011927586061305786 * a_s - 0.0014303811754086053 * eb
                + 0.0014303811754086053 * ec - 0.0028607623508172106 * eb * eta
                + 0.0028607623508172106 * ec * eta + (0.0032596686049908637 * l2
                + 0.0014303811754086053 * l5 - 0.0028607623508172106 * l6) * ec2,
            0.03148805210346711 - 0.0138173300531607 * eb + 0.10430939535970762 * chi2 * eb
                - 0.10430939535970764 * chi3p * eb + 0.013817330053160699 * ec
                + 0.10430939535970761 * chi2 * ec - 0.10430939535970764 * chi3p * ec
                - 0.0276346601063214 * eb * eta + 0.0276346601063214 * ec * eta
                - 0.022886098806537684 * eb * etap + 0.022886098806537684 * ec * etap
                + a_s * (0.014238822788175745 + 0.009542068849044629 * xi1)
                + 0.02607734883992691 * xi1 - 0.011443049403268842 * eb * xi1
                + 0.011443049403268842 * ec * xi1 - 0.022886098806537684 * eb * eta * xi1
                + 0.022886098806537684 * ec * eta * xi1 + (0.02607734883992691 * l2p
                + 0.026077348839926903 * l3 + 0.0138173300531607 * l5 + 0.011443049403268842 * l5p
                - 0.03907770950959024 * l6 - 0.022886098806537684 * l6p + l2 * (0.03148805210346711
                + 0.02607734883992691 * xi1) + 0.011443049403268842 * l5 * xi1
                - 0.022886098806537684 * l6 * xi1) * ec2,
            0.10238572354849537 - 0.044928067647774815 * eb + 1.2162364580303622 * chi2 * eb
                + 0.8344751628776611 * chi2p * eb - 1.2162364580303626 * chi3p * eb
                - 0.41723758143883055 * chi3pp * eb + 0.04492806764777479 * ec
                + 1.2162364580303622 * chi2 * ec + 0.834475162877661 * chi2p * ec
                - 1.2162364580303626 * chi3p * ec - 0.41723758143883055 * chi3pp * ec
                - 0.08985613529554964 * eb * eta + 0.08985613529554964 * ec * eta
                - 0.2668494784636466 * eb * etap + 0.2668494784636466 * ec * etap
                - 0.09154439522615074 * eb * etapp + 0.09154439522615074 * ec * etapp
                + 0.30405911450759066 * xi1 - 0.1334247392318233 * eb * xi1
                + 0.8344751628776611 * chi2 * eb * xi1 - 0.8344751628776611 * chi3p * eb * xi1
                + 0.13342473923182327 * ec * xi1 + 0.834475162877661 * chi2 * ec * xi1
                - 0.8344751628776611 * chi3p * ec * xi1 - 0.2668494784636466 * eb * eta * xi1
                + 0.2668494784636466 * ec * eta * xi1 - 0.18308879045230148 * eb * etap * xi1
                + 0.18308879045230148 * ec * etap * xi1 + a_s * (0.03352210944018954
                + 0.13299472000349521 * xi1 + 0.03816827539617852 * xi2) + 0.10430939535970764 * xi2
                - 0.04577219761307537 * eb * xi2 + 0.04577219761307537 * ec * xi2
                - 0.09154439522615074 * eb * eta * xi2 + 0.09154439522615074 * ec * eta * xi2
                + (0.2519044168277369 * l2p + 0.30405911450759054 * l3 + 0.20861879071941525 * l3p
                + 0.04492806764777482 * l5 + 0.11053864042528559 * l5p - 0.22328087452737289 * l6
                - 0.3126216760767219 * l6p + 0.20861879071941528 * l2p * xi1
                + 0.20861879071941525 * l3 * xi1 + 0.1334247392318233 * l5 * xi1
                + 0.09154439522615074 * l5p * xi1 - 0.35839387368979736 * l6 * xi1
                - 0.18308879045230148 * l6p * xi1 + l2 * (0.10238572354849537
                + 0.30405911450759066 * xi1 + 0.10430939535970764 * xi2)
                + 0.04577219761307537 * l5 * xi2 - 0.09154439522615074 * l6 * xi2) * ec2,
        ],
        BglFormFactor::V6 => [
            0.00414233004658001 + 0.003800059460515357 * a_s + 0.00414233004658001 * eb
                + 0.00414233004658001 * ec + 0.00828466009316002 * ec * eta
                + 0.00414233004658001 * l2 * ec2 + 0.00414233004658001 * l5 * ec2
                - 0.00828466009316002 * l6 * ec2,
            0.04001446777036228 + 0.04321714176889576 * a_s + 0.04001446777036228 * eb
                - 0.13255456149056033 * chi3p * eb + 0.04001446777036228 * ec
                + 0.13255456149056033 * chi2 * ec - 0.13255456149056033 * chi3p * ec
                + 0.08002893554072456 * ec * eta + 0.06627728074528016 * ec * etap
                + 0.03313864037264008 * xi1 + 0.030400475684122855 * a_s * xi1
                + 0.03313864037264008 * eb * xi1 + 0.03313864037264008 * ec * xi1
                + 0.06627728074528016 * ec * eta * xi1 + 0.04001446777036228 * l2 * ec2
                + 0.03313864037264008 * l2p * ec2 + 0.03313864037264008 * l3 * ec2
                + 0.04001446777036228 * l5 * ec2 + 0.03313864037264008 * l5p * ec2
                - 0.11316757591336464 * l6 * ec2 - 0.06627728074528016 * l6p * ec2
                + 0.03313864037264008 * l2 * xi1 * ec2 + 0.03313864037264008 * l5 * xi1 * ec2
                - 0.06627728074528016 * l6 * xi1 * ec2,
            0.1301099928828365 + 0.14509523330458124 * a_s + 0.1301099928828365 * eb
                - 1.5455720916327136 * chi3p * eb - 0.5302182459622413 * chi3pp * eb
                + 0.1301099928828365 * ec + 1.5455720916327136 * chi2 * ec
                + 1.0604364919244826 * chi2p * ec - 1.5455720916327136 * chi3p * ec
                - 0.5302182459622413 * chi3pp * ec + 0.260219985765673 * ec * eta
                + 0.7727860458163568 * ec * etap + 0.26510912298112066 * ec * etapp
                + 0.3863930229081784 * xi1 + 0.4065380855194118 * a_s * xi1
                + 0.3863930229081784 * eb * xi1 - 1.0604364919244826 * chi3p * eb * xi1
                + 0.3863930229081784 * ec * xi1 + 1.0604364919244826 * chi2 * ec * xi1
                - 1.0604364919244826 * chi3p * ec * xi1 + 0.7727860458163568 * ec * eta * xi1
                + 0.5302182459622413 * ec * etap * xi1 + 0.13255456149056033 * xi2
                + 0.12160190273649144 * a_s * xi2 + 0.13255456149056033 * eb * xi2
                + 0.13255456149056033 * ec * xi2 + 0.26510912298112066 * ec * eta * xi2
                + 0.1301099928828365 * l2 * ec2 + 0.32011574216289823 * l2p * ec2
                + 0.3863930229081784 * l3 * ec2 + 0.26510912298112066 * l3p * ec2
                + 0.1301099928828365 * l5 * ec2 + 0.32011574216289823 * l5p * ec2
                - 0.6466130086738514 * l6 * ec2 - 0.9053406073069172 * l6p * ec2
                + 0.3863930229081784 * l2 * xi1 * ec2 + 0.26510912298112066 * l2p * xi1 * ec2
                + 0.26510912298112066 * l3 * xi1 * ec2 + 0.3863930229081784 * l5 * xi1 * ec2
                + 0.26510912298112066 * l5p * xi1 * ec2 - 1.0378951687974776 * l6 * xi1 * ec2
                - 0.5302182459622413 * l6p * xi1 * ec2 + 0.13255456149056033 * l2 * xi2 * ec2
                + 0.13255456149056033 * l5 * xi2 * ec2 - 0.26510912298112066 * l6 * xi2 * ec2,
        ],
        BglFormFactor::V7 => [
            0.00414233004658001 + 0.003800059460515357 * a_s + 0.00414233004658001 * eb
                + 0.00414233004658001 * ec + 0.00828466009316002 * eb * eta
                + 0.00414233004658001 * l2 * ec2 - 0.00414233004658001 * l5 * ec2,
            0.04001446777036228 + 0.04321714176889576 * a_s + 0.04001446777036228 * eb
                + 0.13255456149056033 * chi2 * eb - 0.13255456149056033 * chi3p * eb
                + 0.04001446777036228 * ec - 0.13255456149056033 * chi3p * ec
                + 0.08002893554072456 * eb * eta + 0.06627728074528016 * eb * etap
                + 0.03313864037264008 * xi1 + 0.030400475684122855 * a_s * xi1
                + 0.03313864037264008 * eb * xi1 + 0.03313864037264008 * ec * xi1
                + 0.06627728074528016 * eb * eta * xi1 + 0.04001446777036228 * l2 * ec2
                + 0.03313864037264008 * l2p * ec2 - 0.04001446777036228 * l5 * ec2
                - 0.03313864037264008 * l5p * ec2 + 0.03313864037264008 * l2 * xi1 * ec2
                - 0.03313864037264008 * l5 * xi1 * ec2,
            0.1301099928828365 + 0.14509523330458124 * a_s + 0.1301099928828365 * eb
                + 1.5455720916327136 * chi2 * eb + 1.0604364919244826 * chi2p * eb
                - 1.5455720916327136 * chi3p * eb - 0.5302182459622413 * chi3pp * eb
                + 0.1301099928828365 * ec - 1.5455720916327136 * chi3p * ec
                - 0.5302182459622413 * chi3pp * ec + 0.260219985765673 * eb * eta
                + 0.7727860458163568 * eb * etap + 0.26510912298112066 * eb * etapp
                + 0.3863930229081784 * xi1 + 0.4065380855194118 * a_s * xi1
                + 0.3863930229081784 * eb * xi1 + 1.0604364919244826 * chi2 * eb * xi1
                - 1.0604364919244826 * chi3p * eb * xi1 + 0.3863930229081784 * ec * xi1
                - 1.0604364919244826 * chi3p * ec * xi1 + 0.7727860458163568 * eb * eta * xi1
                + 0.5302182459622413 * eb * etap * xi1 + 0.13255456149056033 * xi2
                + 0.12160190273649144 * a_s * xi2 + 0.13255456149056033 * eb * xi2
                + 0.13255456149056033 * ec * xi2 + 0.26510912298112066 * eb * eta * xi2
                + 0.1301099928828365 * l2 * ec2 + 0.32011574216289823 * l2p * ec2
                - 0.1301099928828365 * l5 * ec2 - 0.32011574216289823 * l5p * ec2
                + 0.3863930229081784 * l2 * xi1 * ec2 + 0.26510912298112066 * l2p * xi1 * ec2
                - 0.3863930229081784 * l5 * xi1 * ec2 - 0.26510912298112066 * l5p * xi1 * ec2
                + 0.13255456149056033 * l2 * xi2 * ec2 - 0.13255456149056033 * l5 * xi2 * ec2,
        ],
        BglFormFactor::A3 => [
            0.0032646160303035363 - 0.0013579525700927507 * a_s + 0.0032646160303035363 * l2 * ec2,
            0.03958930938988248 + 0.0002697117831198897 * a_s + 0.013058464121214145 * eb
                + 0.10446771296971316 * chi2 * eb - 0.10446771296971316 * chi3p * eb
                + 0.013058464121214145 * ec - 0.10446771296971316 * chi3p * ec
                + 0.02611692824242829 * eb * eta + 0.02611692824242829 * xi1
                - 0.010863620560742008 * a_s * xi1 + 0.03958930938988248 * l2 * ec2
                + 0.02611692824242829 * l2p * ec2 - 0.013058464121214145 * l5 * ec2
                + 0.02611692824242829 * l2 * xi1 * ec2,
            0.19459138473995258 + 0.07882797120349648 * a_s + 0.1322403093171016 * eb
                + 1.4757933264156655 * chi2 * eb + 0.8357417037577054 * chi2p * eb
                - 1.4757933264156655 * chi3p * eb - 0.4178708518788527 * chi3pp * eb
                + 0.1322403093171016 * ec - 1.4757933264156655 * chi3p * ec
                - 0.4178708518788527 * chi3pp * ec + 0.2644806186342032 * eb * eta
                + 0.20893542593942635 * eb * etap + 0.3689483316039164 * xi1
                - 0.019569546856524914 * a_s * xi1 + 0.10446771296971318 * eb * xi1
                + 0.8357417037577054 * chi2 * eb * xi1 - 0.8357417037577054 * chi3p * eb * xi1
                + 0.10446771296971318 * ec * xi1 - 0.8357417037577054 * chi3p * ec * xi1
                + 0.20893542593942635 * eb * eta * xi1 + 0.10446771296971318 * xi2
                - 0.04345448224296803 * a_s * xi2 + 0.19459138473995258 * l2 * ec2
                + 0.3167144751190598 * l2p * ec2 - 0.1322403093171016 * l5 * ec2
                - 0.10446771296971318 * l5p * ec2 + 0.3689483316039164 * l2 * xi1 * ec2
                + 0.20893542593942635 * l2p * xi1 * ec2 - 0.10446771296971318 * l5 * xi1 * ec2
                + 0.10446771296971318 * l2 * xi2 * ec2,
        ],
        BglFormFactor::A4 => [
            0.0032646160303035363 - 0.0013579525700927507 * a_s + 0.0032646160303035363 * l2 * ec2,
            0.03958930938988248 + 0.0002697117831198897 * a_s + 0.013058464121214145 * eb
                - 0.10446771296971316 * chi3p * eb + 0.013058464121214145 * ec
                + 0.10446771296971316 * chi2 * ec - 0.10446771296971316 * chi3p * ec
                + 0.02611692824242829 * ec * eta + 0.02611692824242829 * xi1
                - 0.010863620560742008 * a_s * xi1 + 0.03958930938988248 * l2 * ec2
                + 0.02611692824242829 * l2p * ec2 + 0.02611692824242829 * l3 * ec2
                + 0.013058464121214145 * l5 * ec2 - 0.02611692824242829 * l6 * ec2
                + 0.02611692824242829 * l2 * xi1 * ec2,
            0.19459138473995258 + 0.07882797120349648 * a_s + 0.1322403093171016 * eb
                - 1.4757933264156655 * chi3p * eb - 0.4178708518788527 * chi3pp * eb
                + 0.1322403093171016 * ec + 1.4757933264156655 * chi2 * ec
                + 0.8357417037577054 * chi2p * ec - 1.4757933264156655 * chi3p * ec
                - 0.4178708518788527 * chi3pp * ec + 0.2644806186342032 * ec * eta
                + 0.20893542593942635 * ec * etap + 0.3689483316039164 * xi1
                - 0.019569546856524914 * a_s * xi1 + 0.10446771296971318 * eb * xi1
                - 0.8357417037577054 * chi3p * eb * xi1 + 0.10446771296971318 * ec * xi1
                + 0.8357417037577054 * chi2 * ec * xi1 - 0.8357417037577054 * chi3p * ec * xi1
                + 0.20893542593942635 * ec * eta * xi1 + 0.10446771296971318 * xi2
                - 0.04345448224296803 * a_s * xi2 + 0.19459138473995258 * l2 * ec2
                + 0.3167144751190598 * l2p * ec2 + 0.3689483316039164 * l3 * ec2
                + 0.20893542593942635 * l3p * ec2 + 0.1322403093171016 * l5 * ec2
                + 0.10446771296971318 * l5p * ec2 - 0.3689483316039164 * l6 * ec2
                - 0.20893542593942635 * l6p * ec2 + 0.3689483316039164 * l2 * xi1 * ec2
                + 0.20893542593942635 * l2p * xi1 * ec2 + 0.20893542593942635 * l3 * xi1 * ec2
                + 0.10446771296971318 * l5 * xi1 * ec2 - 0.20893542593942635 * l6 * xi1 * ec2
                + 0.10446771296971318 * l2 * xi2 * ec2,
        ],
        BglFormFactor::A7 => [
            0.0030181566001492937 - 0.0012554350876400194 * a_s + 0.0030181566001492937 * l2 * ec2,
            0.03072546294993736 + 0.0048262778721295235 * a_s - 0.02751207995069488 * eb
                - 0.0965810112047774 * chi3p * eb + 0.02751207995069488 * ec
                - 0.0965810112047774 * chi3p * ec + 0.02414525280119435 * xi1
                - 0.010043480701120155 * a_s * xi1 + 0.03072546294993736 * l2 * ec2
                + 0.02414525280119435 * l2p * ec2 - 0.02751207995069488 * l5 * ec2
                + 0.02414525280119435 * l2 * xi1 * ec2,
            0.11437742691975071 + 0.08810044101490708 * a_s - 0.2250545454775743 * eb
                - 1.1763768368075502 * chi3p * eb - 0.3863240448191096 * chi3pp * eb
                + 0.2250545454775743 * ec - 1.1763768368075502 * chi3p * ec
                - 0.3863240448191096 * chi3pp * ec + 0.29409420920188756 * xi1
                + 0.01852326157479586 * a_s * xi1 - 0.22009663960555897 * eb * xi1
                - 0.7726480896382192 * chi3p * eb * xi1 + 0.22009663960555897 * ec * xi1
                - 0.7726480896382192 * chi3p * ec * xi1 + 0.0965810112047774 * xi2
                - 0.040173922804480615 * a_s * xi2 + 0.11437742691975071 * l2 * ec2
                + 0.24580370359949882 * l2p * ec2 - 0.2250545454775743 * l5 * ec2
                - 0.22009663960555897 * l5p * ec2 + 0.29409420920188756 * l2 * xi1 * ec2
                + 0.1931620224095548 * l2p * xi1 * ec2 - 0.22009663960555897 * l5 * xi1 * ec2
                + 0.0965810112047774 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T4 => [
            0.0038692335355298545 + 0.0012933841461525606 * a_s + 0.0038692335355298545 * l2 * ec2,
            0.046921378231901255 + 0.03847593352404564 * a_s + 0.015476934142119418 * eb
                - 0.12381547313695535 * chi3p * eb + 0.015476934142119418 * ec
                - 0.12381547313695535 * chi3p * ec + 0.030953868284238836 * xi1
                + 0.010347073169220485 * a_s * xi1 + 0.046921378231901255 * l2 * ec2
                + 0.030953868284238836 * l2p * ec2 - 0.015476934142119418 * l5 * ec2
                + 0.030953868284238836 * l2 * xi1 * ec2,
            0.23063034199798754 + 0.30375562024325803 * a_s + 0.1567316446433662 * eb
                - 1.749115049694751 * chi3p * eb - 0.4952618925478214 * chi3pp * eb
                + 0.1567316446433662 * ec - 1.749115049694751 * chi3p * ec
                - 0.4952618925478214 * chi3pp * ec + 0.43727876242368774 * xi1
                + 0.32850161453080606 * a_s * xi1 + 0.12381547313695535 * eb * xi1
                - 0.9905237850956428 * chi3p * eb * xi1 + 0.12381547313695535 * ec * xi1
                - 0.9905237850956428 * chi3p * ec * xi1 + 0.12381547313695535 * xi2
                + 0.04138829267688194 * a_s * xi2 + 0.23063034199798754 * l2 * ec2
                + 0.37537102585521004 * l2p * ec2 - 0.1567316446433662 * l5 * ec2
                - 0.12381547313695535 * l5p * ec2 + 0.43727876242368774 * l2 * xi1 * ec2
                + 0.2476309462739107 * l2p * xi1 * ec2 - 0.12381547313695535 * l5 * xi1 * ec2
                + 0.12381547313695535 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T5 => [
            0.0008942822543584558 + 0.00029893530058386786 * a_s + 0.0008942822543584558 * l2 * ec2,
            0.00999826190595043 + 0.008120804260731354 * a_s - 0.0081518516564649 * eb
                - 0.028617032139470585 * chi3p * eb + 0.008151851656464896 * ec
                + 0.028617032139470585 * chi2 * ec - 0.028617032139470585 * chi3p * ec
                + 0.0163037033129298 * ec * eta + 0.007154258034867646 * xi1
                + 0.002391482404670942 * a_s * xi1 + 0.00999826190595043 * l2 * ec2
                + 0.007154258034867646 * l2p * ec2 + 0.007154258034867646 * l3 * ec2
                + 0.0081518516564649 * l5 * ec2 - 0.0163037033129298 * l6 * ec2
                + 0.007154258034867646 * l2 * xi1 * ec2,
            0.04299410423573535 + 0.054628550455241724 * a_s - 0.07483569644879517 * eb
                - 0.37717844526935496 * chi3p * eb - 0.11446812855788234 * chi3pp * eb
                + 0.07483569644879515 * ec + 0.37717844526935496 * chi2 * ec
                + 0.22893625711576468 * chi2p * ec - 0.37717844526935496 * chi3p * ec
                - 0.11446812855788234 * chi3pp * ec + 0.14967139289759035 * ec * eta
                + 0.1304296265034384 * ec * etap + 0.09429461131733874 * xi1
                + 0.0697493988951927 * a_s * xi1 - 0.06521481325171918 * eb * xi1
                - 0.22893625711576468 * chi3p * eb * xi1 + 0.0652148132517192 * ec * xi1
                + 0.22893625711576468 * chi2 * ec * xi1 - 0.22893625711576468 * chi3p * ec * xi1
                + 0.1304296265034384 * ec * eta * xi1 + 0.028617032139470585 * xi2
                + 0.009565929618683768 * a_s * xi2 + 0.04299410423573535 * l2 * ec2
                + 0.07998609524760344 * l2p * ec2 + 0.09429461131733874 * l3 * ec2
                + 0.05723406427894117 * l3p * ec2 + 0.07483569644879517 * l5 * ec2
                + 0.06521481325171918 * l5p * ec2 - 0.21488620614930953 * l6 * ec2
                - 0.1304296265034384 * l6p * ec2 + 0.09429461131733874 * l2 * xi1 * ec2
                + 0.05723406427894117 * l2p * xi1 * ec2 + 0.05723406427894117 * l3 * xi1 * ec2
                + 0.06521481325171918 * l5 * xi1 * ec2 - 0.1304296265034384 * l6 * xi1 * ec2
                + 0.028617032139470585 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T6 => [
            0.0008942822543584558 + 0.00029893530058386786 * a_s + 0.0008942822543584558 * l2 * ec2,
            0.009998261905950432 + 0.008120804260731355 * a_s - 0.0081518516564649 * eb
                + 0.028617032139470585 * chi2 * eb - 0.028617032139470585 * chi3p * eb
                + 0.008151851656464901 * ec - 0.028617032139470585 * chi3p * ec
                - 0.016303703312929792 * eb * eta + 0.007154258034867646 * xi1
                + 0.002391482404670943 * a_s * xi1 + 0.009998261905950432 * l2 * ec2
                + 0.007154258034867646 * l2p * ec2 - 0.008151851656464901 * l5 * ec2
                + 0.007154258034867646 * l2 * xi1 * ec2,
            0.04299410423573535 + 0.05462855045524174 * a_s - 0.07483569644879517 * eb
                + 0.37717844526935496 * chi2 * eb + 0.22893625711576468 * chi2p * eb
                - 0.37717844526935496 * chi3p * eb - 0.11446812855788234 * chi3pp * eb
                + 0.07483569644879517 * ec - 0.37717844526935496 * chi3p * ec
                - 0.11446812855788234 * chi3pp * ec - 0.1496713928975903 * eb * eta
                - 0.13042962650343837 * eb * etap + 0.09429461131733874 * xi1
                + 0.06974939889519273 * a_s * xi1 - 0.0652148132517192 * eb * xi1
                + 0.22893625711576468 * chi2 * eb * xi1 - 0.22893625711576468 * chi3p * eb * xi1
                + 0.0652148132517192 * ec * xi1 - 0.22893625711576468 * chi3p * ec * xi1
                - 0.13042962650343837 * eb * eta * xi1 + 0.028617032139470585 * xi2
                + 0.009565929618683768 * a_s * xi2 + 0.04299410423573535 * l2 * ec2
                + 0.07998609524760344 * l2p * ec2 - 0.07483569644879517 * l5 * ec2
                - 0.0652148132517192 * l5p * ec2 + 0.09429461131733874 * l2 * xi1 * ec2
                + 0.05723406427894117 * l2p * xi1 * ec2 - 0.0652148132517192 * l5 * xi1 * ec2
                + 0.028617032139470585 * l2 * xi2 * ec2,
        ],
        BglFormFactor::T7 => [
            0.008880721929533939 + 0.014809556958285919 * a_s + 0.008880721929533939 * eb
                + 0.008880721929533939 * ec + 0.008880721929533939 * l2 * ec2
                - 0.008880721929533939 * l5 * ec2,
            0.09419314822522039 + 0.17781229715364028 * a_s + 0.09419314822522039 * eb
                - 0.28418310174508604 * chi3p * eb + 0.09419314822522039 * ec
                - 0.28418310174508604 * chi3p * ec + 0.07104577543627151 * xi1
                + 0.11847645566628734 * a_s * xi1 + 0.07104577543627151 * eb * xi1
                + 0.07104577543627151 * ec * xi1 + 0.09419314822522039 * l2 * ec2
                + 0.07104577543627151 * l2p * ec2 - 0.09419314822522039 * l5 * ec2
                - 0.07104577543627151 * l5p * ec2 + 0.07104577543627151 * l2 * xi1 * ec2
                - 0.07104577543627151 * l5 * xi1 * ec2,
            0.3685526663349023 + 0.7582917620602395 * a_s + 0.3685526663349023 * eb
                - 3.5825469466972244 * chi3p * eb - 1.1367324069803442 * chi3pp * eb
                + 0.3685526663349023 * ec - 3.5825469466972244 * chi3p * ec
                - 1.1367324069803442 * chi3pp * ec + 0.8956367366743061 * xi1
                + 1.6594512885616968 * a_s * xi1 + 0.8956367366743061 * eb * xi1
                - 2.2734648139606883 * chi3p * eb * xi1 + 0.8956367366743061 * ec * xi1
                - 2.2734648139606883 * chi3p * ec * xi1 + 0.28418310174508604 * xi2
                + 0.47390582266514936 * a_s * xi2 + 0.28418310174508604 * eb * xi2
                + 0.28418310174508604 * ec * xi2 + 0.3685526663349023 * l2 * ec2
                + 0.7535451858017631 * l2p * ec2 - 0.3685526663349023 * l5 * ec2
                - 0.7535451858017631 * l5p * ec2 + 0.8956367366743061 * l2 * xi1 * ec2
                + 0.5683662034901721 * l2p * xi1 * ec2 - 0.8956367366743061 * l5 * xi1 * ec2
                - 0.5683662034901721 * l5p * xi1 * ec2 + 0.28418310174508604 * l2 * xi2 * ec2
                - 0.28418310174508604 * l5 * xi2 * ec2,
        ],
        BglFormFactor::T8 => [
            0.004677562565499274 + 0.002641374892133541 * a_s - 0.0020525698318663577 * eb
                + 0.0020525698318663577 * ec - 0.004105139663732715 * eb * eta
                + 0.004677562565499274 * l2 * ec2 - 0.0020525698318663577 * l5 * ec2,
            0.04518475698853479 + 0.029053820100103885 * a_s - 0.01982760631337054 * eb
                + 0.14968200209597676 * chi2 * eb - 0.14968200209597676 * chi3p * eb
                + 0.019827606313370535 * ec - 0.14968200209597676 * chi3p * ec
                - 0.03965521262674108 * eb * eta - 0.03284111730986172 * eb * etap
                + 0.03742050052399419 * xi1 + 0.021130999137068326 * a_s * xi1
                - 0.01642055865493086 * eb * xi1 + 0.01642055865493086 * ec * xi1
                - 0.03284111730986172 * eb * eta * xi1 + 0.04518475698853479 * l2 * ec2
                + 0.03742050052399419 * l2p * ec2 - 0.019827606313370535 * l5 * ec2
                - 0.01642055865493086 * l5p * ec2 + 0.03742050052399419 * l2 * xi1 * ec2
                - 0.01642055865493086 * l5 * xi1 * ec2,
            0.1469215695665301 + 0.07347204786986515 * a_s - 0.06447092414476885 * eb
                + 1.7452762278250669 * chi2 * eb + 1.197456016767814 * chi2p * eb
                - 1.7452762278250669 * chi3p * eb - 0.598728008383907 * chi3pp * eb
                + 0.06447092414476885 * ec - 1.7452762278250669 * chi3p * ec
                - 0.598728008383907 * chi3pp * ec - 0.12894184828953772 * eb * eta
                - 0.38292393563365207 * eb * etap - 0.13136446923944692 * eb * etapp
                + 0.4363190569562667 * xi1 + 0.27469255907496776 * a_s * xi1
                - 0.19146196781682606 * eb * xi1 + 1.197456016767814 * chi2 * eb * xi1
                - 1.197456016767814 * chi3p * eb * xi1 + 0.19146196781682603 * ec * xi1
                - 1.197456016767814 * chi3p * ec * xi1 - 0.38292393563365207 * eb * eta * xi1
                - 0.26272893847889384 * eb * etap * xi1 + 0.14968200209597676 * xi2
                + 0.08452399654827332 * a_s * xi2 - 0.06568223461972346 * eb * xi2
                + 0.06568223461972346 * ec * xi2 - 0.13136446923944692 * eb * eta * xi2
                + 0.1469215695665301 * l2 * ec2 + 0.3614780559082783 * l2p * ec2
                - 0.06447092414476885 * l5 * ec2 - 0.15862085050696428 * l5p * ec2
                + 0.4363190569562667 * l2 * xi1 * ec2 + 0.2993640041919535 * l2p * xi1 * ec2
                - 0.19146196781682603 * l5 * xi1 * ec2 - 0.13136446923944692 * l5p * xi1 * ec2
                + 0.14968200209597676 * l2 * xi2 * ec2 - 0.06568223461972346 * l5 * xi2 * ec2,
        ],
        BglFormFactor::T9 => [
            0.004677562565499274 + 0.002641374892133541 * a_s - 0.0020525698318663577 * eb
                + 0.0020525698318663577 * ec + 0.004105139663732715 * ec * eta
                + 0.004677562565499274 * l2 * ec2 + 0.0020525698318663577 * l5 * ec2
                - 0.004105139663732715 * l6 * ec2,
            0.04518475698853479 + 0.029053820100103885 * a_s - 0.01982760631337054 * eb
                - 0.14968200209597676 * chi3p * eb + 0.019827606313370542 * ec
                + 0.14968200209597676 * chi2 * ec - 0.14968200209597676 * chi3p * ec
                + 0.03965521262674108 * ec * eta + 0.03284111730986172 * ec * etap
                + 0.03742050052399419 * xi1 + 0.021130999137068326 * a_s * xi1
                - 0.01642055865493086 * eb * xi1 + 0.01642055865493086 * ec * xi1
                + 0.03284111730986172 * ec * eta * xi1 + 0.04518475698853479 * l2 * ec2
                + 0.03742050052399419 * l2p * ec2 + 0.03742050052399419 * l3 * ec2
                + 0.01982760631337054 * l5 * ec2 + 0.01642055865493086 * l5p * ec2
                - 0.05607577128167193 * l6 * ec2 - 0.03284111730986172 * l6p * ec2
                + 0.03742050052399419 * l2 * xi1 * ec2 + 0.01642055865493086 * l5 * xi1 * ec2
                - 0.03284111730986172 * l6 * xi1 * ec2,
            0.1469215695665301 + 0.07347204786986515 * a_s - 0.06447092414476885 * eb
                - 1.7452762278250669 * chi3p * eb - 0.598728008383907 * chi3pp * eb
                + 0.06447092414476886 * ec + 1.7452762278250669 * chi2 * ec
                + 1.197456016767814 * chi2p * ec - 1.7452762278250669 * chi3p * ec
                - 0.598728008383907 * chi3pp * ec + 0.1289418482895377 * ec * eta
                + 0.38292393563365207 * ec * etap + 0.13136446923944692 * ec * etapp
                + 0.4363190569562667 * xi1 + 0.27469255907496776 * a_s * xi1
                - 0.19146196781682606 * eb * xi1 - 1.197456016767814 * chi3p * eb * xi1
                + 0.19146196781682603 * ec * xi1 + 1.197456016767814 * chi2 * ec * xi1
                - 1.197456016767814 * chi3p * ec * xi1 + 0.38292393563365207 * ec * eta * xi1
                + 0.26272893847889384 * ec * etap * xi1 + 0.14968200209597676 * xi2
                + 0.08452399654827329 * a_s * xi2 - 0.06568223461972346 * eb * xi2
                + 0.06568223461972346 * ec * xi2 + 0.13136446923944692 * ec * eta * xi2
                + 0.1469215695665301 * l2 * ec2 + 0.3614780559082783 * l2p * ec2
                + 0.4363190569562667 * l3 * ec2 + 0.2993640041919535 * l3p * ec2
                + 0.06447092414476885 * l5 * ec2 + 0.1586208505069643 * l5p * ec2
                - 0.32040381610636376 * l6 * ec2 - 0.4486061702533755 * l6p * ec2
                + 0.4363190569562667 * l2 * xi1 * ec2 + 0.2993640041919535 * l2p * xi1 * ec2
                + 0.2993640041919535 * l3 * xi1 * ec2 + 0.19146196781682606 * l5 * xi1 * ec2
                + 0.13136446923944692 * l5p * xi1 * ec2 - 0.514288404873099 * l6 * xi1 * ec2
                - 0.26272893847889384 * l6p * xi1 * ec2 + 0.14968200209597676 * l2 * xi2 * ec2
                + 0.06568223461972346 * l5 * xi2 * ec2 - 0.13136446923944692 * l6 * xi2 * ec2,
        ],
        BglFormFactor::T10 => [
            0.006279618698205529 + 0.010471938151572392 * a_s + 0.006279618698205529 * eb
                + 0.006279618698205529 * ec + 0.012559237396411058 * eb * eta
                + 0.012559237396411058 * ec * eta + 0.006279618698205529 * l2 * ec2
                + 0.006279618698205529 * l5 * ec2 - 0.012559237396411058 * l6 * ec2,
            0.06660461385136295 + 0.12573228109569648 * a_s + 0.06660461385136295 * eb
                + 0.20094779834257692 * chi2 * eb - 0.20094779834257692 * chi3p * eb
                + 0.06660461385136295 * ec + 0.20094779834257692 * chi2 * ec
                - 0.20094779834257692 * chi3p * ec + 0.1332092277027259 * eb * eta
                + 0.1332092277027259 * ec * eta + 0.10047389917128846 * eb * etap
                + 0.10047389917128846 * ec * etap + 0.05023694958564423 * xi1
                + 0.08377550521257913 * a_s * xi1 + 0.05023694958564423 * eb * xi1
                + 0.05023694958564423 * ec * xi1 + 0.10047389917128846 * eb * eta * xi1
                + 0.10047389917128846 * ec * eta * xi1 + 0.06660461385136295 * l2 * ec2
                + 0.05023694958564423 * l2p * ec2 + 0.05023694958564423 * l3 * ec2
                + 0.06660461385136295 * l5 * ec2 + 0.05023694958564423 * l5p * ec2
                - 0.18344617728837015 * l6 * ec2 - 0.10047389917128846 * l6p * ec2
                + 0.05023694958564423 * l2 * xi1 * ec2 + 0.05023694958564423 * l5 * xi1 * ec2
                - 0.10047389917128846 * l6 * xi1 * ec2,
            0.26060608958979237 + 0.5361932470706913 * a_s + 0.26060608958979237 * eb
                + 2.533243239928768 * chi2 * eb + 1.6075823867406152 * chi2p * eb
                - 2.533243239928768 * chi3p * eb - 0.8037911933703076 * chi3pp * eb
                + 0.26060608958979237 * ec + 2.533243239928768 * chi2 * ec
                + 1.6075823867406152 * chi2p * ec - 2.533243239928768 * chi3p * ec
                - 0.8037911933703076 * chi3pp * ec + 0.5212121791795847 * eb * eta
                + 0.5212121791795847 * ec * eta + 1.266621619964384 * eb * etap
                + 1.266621619964384 * ec * etap + 0.4018955966851538 * eb * etapp
                + 0.4018955966851538 * ec * etapp + 0.633310809982192 * xi1
                + 1.17340925919073 * a_s * xi1 + 0.633310809982192 * eb * xi1
                + 1.6075823867406152 * chi2 * eb * xi1 - 1.6075823867406152 * chi3p * eb * xi1
                + 0.633310809982192 * ec * xi1 + 1.6075823867406152 * chi2 * ec * xi1
                - 1.6075823867406152 * chi3p * ec * xi1 + 1.266621619964384 * eb * eta * xi1
                + 1.266621619964384 * ec * eta * xi1 + 0.8037911933703076 * eb * etap * xi1
                + 0.8037911933703076 * ec * etap * xi1 + 0.2009477983425769 * xi2
                + 0.3351020208503165 * a_s * xi2 + 0.2009477983425769 * eb * xi2
                + 0.2009477983425769 * ec * xi2 + 0.4018955966851538 * eb * eta * xi2
                + 0.4018955966851538 * ec * eta * xi2 + 0.26060608958979237 * l2 * ec2
                + 0.5328369108109036 * l2p * ec2 + 0.633310809982192 * l3 * ec2
                + 0.4018955966851538 * l3p * ec2 + 0.26060608958979237 * l5 * ec2
                + 0.5328369108109036 * l5p * ec2 - 1.1545229891617768 * l6 * ec2
                - 1.467569418306961 * l6p * ec2 + 0.633310809982192 * l2 * xi1 * ec2
                + 0.4018955966851538 * l2p * xi1 * ec2 + 0.4018955966851538 * l3 * xi1 * ec2
                + 0.633310809982192 * l5 * xi1 * ec2 + 0.4018955966851538 * l5p * xi1 * ec2
                - 1.668517216649538 * l6 * xi1 * ec2 - 0.8037911933703076 * l6p * xi1 * ec2
                + 0.2009477983425769 * l2 * xi2 * ec2 + 0.2009477983425769 * l5 * xi2 * ec2
                - 0.4018955966851538 * l6 * xi2 * ec2,
        ],
    }
}
